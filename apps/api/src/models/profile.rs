use serde::{Deserialize, Serialize};

/// A user's background, collected by the profile setup step.
/// Replaced wholesale on edit; discarded with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub full_name: String,
    pub age: u32,
    pub education: String,
    pub technical_background: String,
}

/// Career preferences, collected by the assessment step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerPreferences {
    pub interests: Vec<String>,
    pub work_style: String,
    pub learning_style: String,
    pub career_goals: String,
}

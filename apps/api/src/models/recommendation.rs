use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single suggested career path with supporting rationale and skills data.
/// Immutable once generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub career_path: String,
    /// Percentage match, 0-100.
    pub match_score: u8,
    pub reasoning: String,
    pub key_skills_required: Vec<String>,
    pub market_outlook: String,
}

/// An ordered recommendation run. Owned by the session and replaced, not
/// merged, by subsequent requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommended_paths: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

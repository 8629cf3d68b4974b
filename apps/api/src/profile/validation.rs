//! Field validation for profile and preference submissions.
//!
//! Every failure names the offending field so the UI can highlight it.
//! Validation runs before anything is stored and before any model call.

use crate::errors::AppError;
use crate::models::profile::{CareerPreferences, Profile};

const MIN_AGE: u32 = 13;
const MAX_AGE: u32 = 100;

pub fn validate_profile(profile: &Profile) -> Result<(), AppError> {
    require_text("full_name", &profile.full_name)?;
    require_text("education", &profile.education)?;
    require_text("technical_background", &profile.technical_background)?;
    if !(MIN_AGE..=MAX_AGE).contains(&profile.age) {
        return Err(AppError::Validation(format!(
            "age must be between {MIN_AGE} and {MAX_AGE}"
        )));
    }
    Ok(())
}

pub fn validate_preferences(prefs: &CareerPreferences) -> Result<(), AppError> {
    if prefs.interests.is_empty() {
        return Err(AppError::Validation(
            "interests must contain at least one entry".to_string(),
        ));
    }
    for interest in &prefs.interests {
        require_text("interests", interest)?;
    }
    require_text("work_style", &prefs.work_style)?;
    require_text("learning_style", &prefs.learning_style)?;
    require_text("career_goals", &prefs.career_goals)?;
    Ok(())
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_profile() -> Profile {
        Profile {
            full_name: "Asha Rao".to_string(),
            age: 24,
            education: "BS CS".to_string(),
            technical_background: "Python internships".to_string(),
        }
    }

    fn valid_preferences() -> CareerPreferences {
        CareerPreferences {
            interests: vec!["ML".to_string(), "backend".to_string()],
            work_style: "small teams".to_string(),
            learning_style: "project-based".to_string(),
            career_goals: "industry".to_string(),
        }
    }

    #[test]
    fn test_valid_profile_passes() {
        assert!(validate_profile(&valid_profile()).is_ok());
    }

    #[test]
    fn test_blank_education_is_rejected_and_named() {
        let mut profile = valid_profile();
        profile.education = "   ".to_string();
        let err = validate_profile(&profile).unwrap_err();
        assert!(err.to_string().contains("education"));
    }

    #[test]
    fn test_age_out_of_range_is_rejected() {
        let mut profile = valid_profile();
        profile.age = 7;
        assert!(validate_profile(&profile).is_err());
        profile.age = 130;
        assert!(validate_profile(&profile).is_err());
        profile.age = 13;
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_valid_preferences_pass() {
        assert!(validate_preferences(&valid_preferences()).is_ok());
    }

    #[test]
    fn test_empty_interests_rejected() {
        let mut prefs = valid_preferences();
        prefs.interests.clear();
        let err = validate_preferences(&prefs).unwrap_err();
        assert!(err.to_string().contains("interests"));
    }

    #[test]
    fn test_blank_interest_entry_rejected() {
        let mut prefs = valid_preferences();
        prefs.interests.push(" ".to_string());
        assert!(validate_preferences(&prefs).is_err());
    }

    #[test]
    fn test_blank_goals_rejected() {
        let mut prefs = valid_preferences();
        prefs.career_goals = String::new();
        let err = validate_preferences(&prefs).unwrap_err();
        assert!(err.to_string().contains("career_goals"));
    }
}

//! Skills-gap analysis behind a pluggable trait.
//!
//! Default: `CatalogGapAnalyzer` (pure-Rust, deterministic, fully testable)
//! comparing self-ratings against the static industry catalog.
//! Alternative: `LlmGapAnalyzer` (semantic, covers paths the catalog does
//! not), selected at startup via `ENABLE_LLM_GAP_ANALYSIS`.
//!
//! `AppState` holds an `Arc<dyn GapAnalyzer>`.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_RETRY_REMINDER;
use crate::llm_client::{parse_model_json, TextModel};
use crate::models::profile::Profile;
use crate::skills::catalog;
use crate::skills::prompts::{GAP_PROMPT_TEMPLATE, GAP_SYSTEM};

// ────────────────────────────────────────────────────────────────────────────
// Output data models (shared across both analyzer backends)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillToDevelop {
    pub skill: String,
    pub priority: Priority,
    pub recommended_resources: Vec<String>,
}

/// Full gap report returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub career_path: String,
    /// 0 - 100.
    pub readiness_score: u32,
    pub proficient: Vec<String>,
    pub to_develop: Vec<SkillToDevelop>,
    pub estimated_time_to_close: String,
    /// "catalog" | "llm", for transparency.
    pub analyzer_backend: String,
}

/// The user's self-rated proficiency per skill name, 0-5.
#[derive(Debug, Clone, Deserialize)]
pub struct SelfAssessment {
    pub ratings: HashMap<String, u8>,
}

pub const MAX_RATING: u8 = 5;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching the endpoint,
/// handler, or caller code.
#[async_trait]
pub trait GapAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        career_path: &str,
        profile: &Profile,
        assessment: &SelfAssessment,
    ) -> Result<GapReport, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// CatalogGapAnalyzer — deterministic default
// ────────────────────────────────────────────────────────────────────────────

/// Pure-Rust gap analyzer. Fast, deterministic, no LLM call.
///
/// Algorithm:
/// 1. For each catalog skill: rating defaults to 0 when unrated,
///    gap = weight - min(rating, weight).
/// 2. readiness_score = sum(min(rating, weight)) / sum(weight) * 100
/// 3. Priority from gap size: >=3 high, 2 medium, 1 low.
/// 4. Estimated time: one month per two open gap points, minimum one.
pub struct CatalogGapAnalyzer;

#[async_trait]
impl GapAnalyzer for CatalogGapAnalyzer {
    async fn analyze(
        &self,
        career_path: &str,
        _profile: &Profile,
        assessment: &SelfAssessment,
    ) -> Result<GapReport, AppError> {
        compute_catalog_gap(career_path, assessment)
    }
}

fn compute_catalog_gap(
    career_path: &str,
    assessment: &SelfAssessment,
) -> Result<GapReport, AppError> {
    let categories = catalog::industry_skills(career_path).ok_or_else(|| {
        AppError::NotFound(format!(
            "No skills catalog for '{career_path}'. Enable the LLM analyzer for uncatalogued paths."
        ))
    })?;

    let mut covered: u32 = 0;
    let mut required: u32 = 0;
    let mut total_gap: u32 = 0;
    let mut proficient = Vec::new();
    let mut to_develop = Vec::new();

    for category in &categories {
        for skill in &category.skills {
            let rating = assessment
                .ratings
                .get(skill.name)
                .copied()
                .unwrap_or(0)
                .min(MAX_RATING);
            let weight = u32::from(skill.weight);
            covered += u32::from(rating.min(skill.weight));
            required += weight;

            let gap = skill.weight.saturating_sub(rating);
            if gap == 0 {
                proficient.push(skill.name.to_string());
            } else {
                total_gap += u32::from(gap);
                to_develop.push(SkillToDevelop {
                    skill: skill.name.to_string(),
                    priority: priority_for_gap(gap),
                    recommended_resources: skill
                        .resources
                        .iter()
                        .map(|r| format!("{} ({})", r.name, r.url))
                        .collect(),
                });
            }
        }
    }

    let readiness_score = if required == 0 {
        100
    } else {
        covered * 100 / required
    };

    Ok(GapReport {
        career_path: career_path.to_string(),
        readiness_score,
        proficient,
        to_develop,
        estimated_time_to_close: estimate_months(total_gap),
        analyzer_backend: "catalog".to_string(),
    })
}

fn priority_for_gap(gap: u8) -> Priority {
    match gap {
        0..=1 => Priority::Low,
        2 => Priority::Medium,
        _ => Priority::High,
    }
}

fn estimate_months(total_gap: u32) -> String {
    if total_gap == 0 {
        return "0 months".to_string();
    }
    let months = total_gap.div_ceil(2).max(1);
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{months} months")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmGapAnalyzer — semantic backend
// ────────────────────────────────────────────────────────────────────────────

/// Semantic gap analyzer via the model gateway. Covers career paths the
/// static catalog does not, at the cost of a model round trip.
pub struct LlmGapAnalyzer(pub Arc<dyn TextModel>);

/// Wire shape of the model reply; `career_path` and the backend tag are
/// filled in locally.
#[derive(Debug, Deserialize)]
struct GapReply {
    readiness_score: u32,
    proficient: Vec<String>,
    to_develop: Vec<SkillToDevelop>,
    estimated_time_to_close: String,
}

const MAX_PARSE_RETRIES: u32 = 1;

#[async_trait]
impl GapAnalyzer for LlmGapAnalyzer {
    async fn analyze(
        &self,
        career_path: &str,
        profile: &Profile,
        assessment: &SelfAssessment,
    ) -> Result<GapReport, AppError> {
        let prompt = build_prompt(career_path, profile, assessment)?;

        let mut last_parse_error = String::new();
        for attempt in 0..=MAX_PARSE_RETRIES {
            let prompt = if attempt == 0 {
                prompt.clone()
            } else {
                format!("{prompt}{JSON_RETRY_REMINDER}")
            };

            let reply = self
                .0
                .generate(&prompt, GAP_SYSTEM)
                .await
                .map_err(|e| AppError::Upstream(format!("gap analysis call failed: {e}")))?;

            match parse_model_json::<GapReply>(&reply)
                .map_err(|e| e.to_string())
                .and_then(validate_reply)
            {
                Ok(reply) => {
                    info!("LLM gap analysis for '{career_path}' succeeded");
                    return Ok(GapReport {
                        career_path: career_path.to_string(),
                        readiness_score: reply.readiness_score,
                        proficient: reply.proficient,
                        to_develop: reply.to_develop,
                        estimated_time_to_close: reply.estimated_time_to_close,
                        analyzer_backend: "llm".to_string(),
                    });
                }
                Err(e) => {
                    warn!(
                        "Gap analysis reply attempt {}/{} unusable: {e}",
                        attempt + 1,
                        MAX_PARSE_RETRIES + 1
                    );
                    last_parse_error = e;
                }
            }
        }

        Err(AppError::ModelParse(format!(
            "gap analysis reply unusable after {} attempts: {last_parse_error}",
            MAX_PARSE_RETRIES + 1
        )))
    }
}

fn validate_reply(reply: GapReply) -> Result<GapReply, String> {
    if reply.readiness_score > 100 {
        return Err(format!(
            "readiness_score {} exceeds 100",
            reply.readiness_score
        ));
    }
    Ok(reply)
}

fn build_prompt(
    career_path: &str,
    profile: &Profile,
    assessment: &SelfAssessment,
) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize profile: {e}")))?;
    let ratings_json = serde_json::to_string_pretty(&assessment.ratings)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize ratings: {e}")))?;
    Ok(GAP_PROMPT_TEMPLATE
        .replace("{career_path}", career_path)
        .replace("{profile_json}", &profile_json)
        .replace("{ratings_json}", &ratings_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::llm_client::LlmError;

    fn profile() -> Profile {
        Profile {
            full_name: "Asha Rao".to_string(),
            age: 24,
            education: "BS CS".to_string(),
            technical_background: "Python internships".to_string(),
        }
    }

    fn ratings(pairs: &[(&str, u8)]) -> SelfAssessment {
        SelfAssessment {
            ratings: pairs
                .iter()
                .map(|(name, rating)| (name.to_string(), *rating))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_all_expert_ratings_are_fully_ready() {
        let categories = catalog::industry_skills("Data Science").unwrap();
        let pairs: Vec<(String, u8)> = categories
            .iter()
            .flat_map(|c| c.skills.iter().map(|s| (s.name.to_string(), 5)))
            .collect();
        let assessment = SelfAssessment {
            ratings: pairs.into_iter().collect(),
        };

        let report = CatalogGapAnalyzer
            .analyze("Data Science", &profile(), &assessment)
            .await
            .unwrap();
        assert_eq!(report.readiness_score, 100);
        assert!(report.to_develop.is_empty());
        assert_eq!(report.estimated_time_to_close, "0 months");
        assert_eq!(report.analyzer_backend, "catalog");
    }

    #[tokio::test]
    async fn test_unrated_skills_count_as_zero() {
        let report = CatalogGapAnalyzer
            .analyze("Data Science", &profile(), &ratings(&[]))
            .await
            .unwrap();
        assert_eq!(report.readiness_score, 0);
        assert!(report.proficient.is_empty());
        // Every catalog skill shows up as a gap with resources attached.
        assert!(report.to_develop.len() >= 10);
        assert!(report
            .to_develop
            .iter()
            .all(|s| !s.recommended_resources.is_empty()));
    }

    #[tokio::test]
    async fn test_priorities_follow_gap_size() {
        // Python weight 5: rating 1 -> gap 4 -> high.
        // Machine Learning weight 4: rating 2 -> gap 2 -> medium.
        // Deep Learning weight 3: rating 2 -> gap 1 -> low.
        let report = CatalogGapAnalyzer
            .analyze(
                "Data Science",
                &profile(),
                &ratings(&[
                    ("Python for Data Science", 1),
                    ("Machine Learning", 2),
                    ("Deep Learning", 2),
                ]),
            )
            .await
            .unwrap();

        let priority_of = |name: &str| {
            report
                .to_develop
                .iter()
                .find(|s| s.skill == name)
                .unwrap()
                .priority
        };
        assert_eq!(priority_of("Python for Data Science"), Priority::High);
        assert_eq!(priority_of("Machine Learning"), Priority::Medium);
        assert_eq!(priority_of("Deep Learning"), Priority::Low);
    }

    #[tokio::test]
    async fn test_analysis_is_deterministic() {
        let assessment = ratings(&[("Python for Data Science", 3), ("SQL & Databases", 4)]);
        let first = CatalogGapAnalyzer
            .analyze("Data Science", &profile(), &assessment)
            .await
            .unwrap();
        let second = CatalogGapAnalyzer
            .analyze("Data Science", &profile(), &assessment)
            .await
            .unwrap();
        assert_eq!(first.readiness_score, second.readiness_score);
        assert_eq!(first.estimated_time_to_close, second.estimated_time_to_close);
        assert_eq!(first.to_develop.len(), second.to_develop.len());
    }

    #[tokio::test]
    async fn test_ratings_above_weight_do_not_overshoot() {
        // Deep Learning weight is 3; a rating of 5 counts as 3.
        let report = CatalogGapAnalyzer
            .analyze("Data Science", &profile(), &ratings(&[("Deep Learning", 5)]))
            .await
            .unwrap();
        assert!(report.proficient.contains(&"Deep Learning".to_string()));
        assert!(report.readiness_score < 100);
    }

    #[tokio::test]
    async fn test_uncatalogued_path_is_not_found() {
        let err = CatalogGapAnalyzer
            .analyze("Digital Marketing", &profile(), &ratings(&[]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_estimate_months_rounds_up() {
        assert_eq!(estimate_months(0), "0 months");
        assert_eq!(estimate_months(1), "1 month");
        assert_eq!(estimate_months(2), "1 month");
        assert_eq!(estimate_months(3), "2 months");
        assert_eq!(estimate_months(9), "5 months");
    }

    struct FixedModel {
        replies: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextModel for FixedModel {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() {
                return Err(LlmError::EmptyContent);
            }
            Ok(replies.remove(0))
        }
    }

    #[tokio::test]
    async fn test_llm_analyzer_parses_reply_and_tags_backend() {
        let reply = r#"{
            "readiness_score": 55,
            "proficient": ["Python"],
            "to_develop": [
                {
                    "skill": "Kubernetes",
                    "priority": "high",
                    "recommended_resources": ["Kubernetes Documentation"]
                }
            ],
            "estimated_time_to_close": "4 months"
        }"#;
        let analyzer = LlmGapAnalyzer(Arc::new(FixedModel {
            replies: Mutex::new(vec![reply.to_string()]),
        }));
        let report = analyzer
            .analyze("DevOps Engineering", &profile(), &ratings(&[("Python", 4)]))
            .await
            .unwrap();
        assert_eq!(report.career_path, "DevOps Engineering");
        assert_eq!(report.readiness_score, 55);
        assert_eq!(report.to_develop[0].priority, Priority::High);
        assert_eq!(report.analyzer_backend, "llm");
    }

    #[tokio::test]
    async fn test_llm_analyzer_rejects_out_of_range_score() {
        let reply = r#"{
            "readiness_score": 180,
            "proficient": [],
            "to_develop": [],
            "estimated_time_to_close": "1 month"
        }"#;
        let analyzer = LlmGapAnalyzer(Arc::new(FixedModel {
            replies: Mutex::new(vec![reply.to_string(), reply.to_string()]),
        }));
        let err = analyzer
            .analyze("DevOps Engineering", &profile(), &ratings(&[]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ModelParse(_)));
    }
}

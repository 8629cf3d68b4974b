//! Recommendation Orchestrator.
//!
//! Flow: serialize profile + preferences into the prompt -> model call ->
//! decode the JSON reply -> validate shape invariants. Transport failures
//! surface as `Upstream`; undecodable or invariant-violating replies get
//! one corrective re-prompt before surfacing as `ModelParse`.

use anyhow::anyhow;
use chrono::Utc;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_RETRY_REMINDER;
use crate::llm_client::{parse_model_json, TextModel};
use crate::models::profile::{CareerPreferences, Profile};
use crate::models::recommendation::{Recommendation, RecommendationSet};
use crate::recommendation::prompts::{RECOMMEND_PROMPT_TEMPLATE, RECOMMEND_SYSTEM};

/// Extra attempts after the first undecodable reply.
const MAX_PARSE_RETRIES: u32 = 1;

/// Wire shape of the model reply.
#[derive(Debug, Deserialize)]
struct RecommendReply {
    recommended_paths: Vec<Recommendation>,
}

/// Runs one recommendation exchange and returns a validated set.
pub async fn recommend(
    model: &dyn TextModel,
    profile: &Profile,
    preferences: &CareerPreferences,
) -> Result<RecommendationSet, AppError> {
    let prompt = build_prompt(profile, preferences)?;

    let mut last_parse_error = String::new();
    for attempt in 0..=MAX_PARSE_RETRIES {
        let prompt = if attempt == 0 {
            prompt.clone()
        } else {
            // Corrective re-prompt: same context, JSON reminder appended.
            format!("{prompt}{JSON_RETRY_REMINDER}")
        };

        let reply = model
            .generate(&prompt, RECOMMEND_SYSTEM)
            .await
            .map_err(|e| AppError::Upstream(format!("recommendation call failed: {e}")))?;

        match parse_model_json::<RecommendReply>(&reply)
            .map_err(|e| e.to_string())
            .and_then(|r| validate_reply(r.recommended_paths))
        {
            Ok(paths) => {
                info!("Model recommended {} career paths", paths.len());
                return Ok(RecommendationSet {
                    recommended_paths: paths,
                    generated_at: Utc::now(),
                });
            }
            Err(e) => {
                warn!(
                    "Recommendation reply attempt {}/{} unusable: {e}",
                    attempt + 1,
                    MAX_PARSE_RETRIES + 1
                );
                last_parse_error = e;
            }
        }
    }

    Err(AppError::ModelParse(format!(
        "recommendation reply unusable after {} attempts: {last_parse_error}",
        MAX_PARSE_RETRIES + 1
    )))
}

/// Shape invariants on the decoded reply: at least one path, and every
/// entry carries a non-blank title and rationale.
fn validate_reply(paths: Vec<Recommendation>) -> Result<Vec<Recommendation>, String> {
    if paths.is_empty() {
        return Err("recommended_paths is empty".to_string());
    }
    for (i, rec) in paths.iter().enumerate() {
        if rec.career_path.trim().is_empty() {
            return Err(format!("recommendation {i} has an empty career_path"));
        }
        if rec.reasoning.trim().is_empty() {
            return Err(format!("recommendation {i} has an empty reasoning"));
        }
    }
    Ok(paths)
}

/// Builds the recommendation prompt by embedding the serialized profile.
pub fn build_prompt(
    profile: &Profile,
    preferences: &CareerPreferences,
) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize profile: {e}")))?;
    let preferences_json = serde_json::to_string_pretty(preferences)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize preferences: {e}")))?;

    Ok(RECOMMEND_PROMPT_TEMPLATE
        .replace("{profile_json}", &profile_json)
        .replace("{preferences_json}", &preferences_json))
}

//! Roadmap planner: selected career path + profile -> structured
//! learning roadmap. Same exchange discipline as the recommender: one
//! corrective re-prompt on an undecodable reply, then a parse error.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_RETRY_REMINDER;
use crate::llm_client::{parse_model_json, TextModel};
use crate::models::profile::Profile;
use crate::roadmap::prompts::{ROADMAP_PROMPT_TEMPLATE, ROADMAP_SYSTEM};

const MAX_PARSE_RETRIES: u32 = 1;

/// A staged learning plan for one career path. Replaced on regeneration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningRoadmap {
    pub fundamentals: Vec<String>,
    pub intermediate_skills: Vec<String>,
    pub advanced_topics: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    pub estimated_timeline: String,
}

#[derive(Debug, Deserialize)]
struct RoadmapReply {
    roadmap: LearningRoadmap,
}

pub async fn plan_roadmap(
    model: &dyn TextModel,
    career_path: &str,
    profile: &Profile,
) -> Result<LearningRoadmap, AppError> {
    let prompt = build_prompt(career_path, profile)?;

    let mut last_parse_error = String::new();
    for attempt in 0..=MAX_PARSE_RETRIES {
        let prompt = if attempt == 0 {
            prompt.clone()
        } else {
            format!("{prompt}{JSON_RETRY_REMINDER}")
        };

        let reply = model
            .generate(&prompt, ROADMAP_SYSTEM)
            .await
            .map_err(|e| AppError::Upstream(format!("roadmap call failed: {e}")))?;

        match parse_model_json::<RoadmapReply>(&reply)
            .map_err(|e| e.to_string())
            .and_then(|r| validate_roadmap(r.roadmap))
        {
            Ok(roadmap) => {
                info!("Planned roadmap for '{career_path}'");
                return Ok(roadmap);
            }
            Err(e) => {
                warn!(
                    "Roadmap reply attempt {}/{} unusable: {e}",
                    attempt + 1,
                    MAX_PARSE_RETRIES + 1
                );
                last_parse_error = e;
            }
        }
    }

    Err(AppError::ModelParse(format!(
        "roadmap reply unusable after {} attempts: {last_parse_error}",
        MAX_PARSE_RETRIES + 1
    )))
}

fn validate_roadmap(roadmap: LearningRoadmap) -> Result<LearningRoadmap, String> {
    if roadmap.fundamentals.is_empty() {
        return Err("roadmap.fundamentals is empty".to_string());
    }
    if roadmap.estimated_timeline.trim().is_empty() {
        return Err("roadmap.estimated_timeline is empty".to_string());
    }
    Ok(roadmap)
}

pub fn build_prompt(career_path: &str, profile: &Profile) -> Result<String, AppError> {
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(|e| AppError::Internal(anyhow!("Failed to serialize profile: {e}")))?;
    Ok(ROADMAP_PROMPT_TEMPLATE
        .replace("{career_path}", career_path)
        .replace("{profile_json}", &profile_json))
}

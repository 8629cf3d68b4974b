use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::skills::gap::{GapReport, SelfAssessment, MAX_RATING};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GapAnalysisRequest {
    pub career_path: String,
    #[serde(flatten)]
    pub assessment: SelfAssessment,
}

/// POST /api/v1/sessions/:id/skills-gap
pub async fn handle_analyze_gap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GapAnalysisRequest>,
) -> Result<Json<GapReport>, AppError> {
    if req.career_path.trim().is_empty() {
        return Err(AppError::Validation("career_path must not be empty".to_string()));
    }
    for (skill, rating) in &req.assessment.ratings {
        if *rating > MAX_RATING {
            return Err(AppError::Validation(format!(
                "rating for '{skill}' must be between 0 and {MAX_RATING}"
            )));
        }
    }

    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    let profile = session.profile.ok_or_else(|| {
        AppError::Validation("Complete your profile before analyzing skills".to_string())
    })?;

    let report = state
        .gap_analyzer
        .analyze(&req.career_path, &profile, &req.assessment)
        .await?;

    state
        .sessions
        .update(id, |s| s.gap_report = Some(report.clone()))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(report))
}

/// GET /api/v1/sessions/:id/skills-gap
pub async fn handle_get_gap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GapReport>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    session
        .gap_report
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No gap analysis run yet".to_string()))
}

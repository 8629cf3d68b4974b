use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::roadmap::planner::{self, LearningRoadmap};
use crate::state::AppState;

/// POST /api/v1/sessions/:id/roadmap
///
/// Generates a roadmap for the session's selected career path, replacing
/// any previous one. Selecting a path first is required, matching the
/// original guidance flow.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LearningRoadmap>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let profile = session.profile.ok_or_else(|| {
        AppError::Validation("Complete your profile before requesting a roadmap".to_string())
    })?;
    let career_path = session.selected_path.ok_or_else(|| {
        AppError::Validation(
            "Select a career path from your recommendations first".to_string(),
        )
    })?;

    let roadmap = planner::plan_roadmap(state.model.as_ref(), &career_path, &profile).await?;

    state
        .sessions
        .update(id, |s| s.roadmap = Some(roadmap.clone()))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(roadmap))
}

/// GET /api/v1/sessions/:id/roadmap
pub async fn handle_get_roadmap(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LearningRoadmap>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    session
        .roadmap
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No roadmap generated yet".to_string()))
}

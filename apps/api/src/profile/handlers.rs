use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{CareerPreferences, Profile};
use crate::profile::validation::{validate_preferences, validate_profile};
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
}

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: Option<Profile>,
    pub preferences: Option<CareerPreferences>,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let session_id = state.sessions.create().await;
    tracing::info!("Created session {session_id}");
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse { session_id }),
    )
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id).await {
        tracing::info!("Discarded session {id}");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Session {id} not found")))
    }
}

/// GET /api/v1/sessions/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(ProfileResponse {
        profile: session.profile,
        preferences: session.preferences,
    }))
}

/// PUT /api/v1/sessions/:id/profile
pub async fn handle_put_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(profile): Json<Profile>,
) -> Result<StatusCode, AppError> {
    validate_profile(&profile)?;
    state
        .sessions
        .update(id, |s| s.profile = Some(profile))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/sessions/:id/preferences
pub async fn handle_put_preferences(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(prefs): Json<CareerPreferences>,
) -> Result<StatusCode, AppError> {
    validate_preferences(&prefs)?;
    state
        .sessions
        .update(id, |s| s.preferences = Some(prefs))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consultation::advisor;
use crate::errors::AppError;
use crate::models::conversation::{ConversationTurn, Role};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub turns: Vec<ConversationTurn>,
}

/// POST /api/v1/sessions/:id/consultation
///
/// Answers one question. The user turn and the advisor's answer are both
/// appended to the session history only after a successful exchange, so a
/// failed model call leaves the history untouched for a clean retry.
pub async fn handle_ask(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let question = req.question.trim().to_string();
    if question.is_empty() {
        return Err(AppError::Validation("question must not be empty".to_string()));
    }

    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    let profile = session.profile.ok_or_else(|| {
        AppError::Validation(
            "Complete your profile setup first to get personalized career advice".to_string(),
        )
    })?;

    let answer =
        advisor::consult(state.model.as_ref(), &profile, &session.turns, &question).await?;

    state
        .sessions
        .update(id, |s| {
            s.turns.push(ConversationTurn::new(Role::User, question));
            s.turns
                .push(ConversationTurn::new(Role::Assistant, answer.clone()));
        })
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(AskResponse { answer }))
}

/// GET /api/v1/sessions/:id/consultation
pub async fn handle_get_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(HistoryResponse {
        turns: session.turns,
    }))
}

/// DELETE /api/v1/sessions/:id/consultation
pub async fn handle_clear_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state
        .sessions
        .update(id, |s| s.turns.clear())
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recommendation::RecommendationSet;
use crate::recommendation::market::{self, CareerPathInfo, MarketSnapshot};
use crate::recommendation::recommender;
use crate::state::AppState;

/// POST /api/v1/sessions/:id/recommendations
///
/// Generates a fresh recommendation set from the stored profile and
/// preferences. The previous set, if any, is replaced.
pub async fn handle_generate_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationSet>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    let profile = session.profile.ok_or_else(|| {
        AppError::Validation("Complete your profile before requesting recommendations".to_string())
    })?;
    let preferences = session.preferences.ok_or_else(|| {
        AppError::Validation(
            "Complete the career assessment before requesting recommendations".to_string(),
        )
    })?;

    let set = recommender::recommend(state.model.as_ref(), &profile, &preferences).await?;

    state
        .sessions
        .update(id, |s| s.recommendations = Some(set.clone()))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(set))
}

/// GET /api/v1/sessions/:id/recommendations
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationSet>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    session
        .recommendations
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No recommendations generated yet".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct SelectPathRequest {
    pub career_path: String,
}

/// POST /api/v1/sessions/:id/career-path
///
/// Selects the career path later operations (roadmap, skills gap) work on.
pub async fn handle_select_path(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SelectPathRequest>,
) -> Result<StatusCode, AppError> {
    if req.career_path.trim().is_empty() {
        return Err(AppError::Validation("career_path must not be empty".to_string()));
    }
    // Model-suggested paths outside the static catalog are allowed; the
    // catalog only gates market lookups.
    let selected = market::canonical_path(&req.career_path)
        .map(str::to_string)
        .unwrap_or_else(|| req.career_path.trim().to_string());

    state
        .sessions
        .update(id, |s| s.selected_path = Some(selected))
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct MarketResponse {
    pub snapshot: MarketSnapshot,
    pub details: CareerPathInfo,
}

/// GET /api/v1/market/:career_path
pub async fn handle_get_market(
    Path(career_path): Path<String>,
) -> Result<Json<MarketResponse>, AppError> {
    let snapshot = market::market_snapshot(&career_path)
        .ok_or_else(|| AppError::NotFound(format!("Unknown career path '{career_path}'")))?;
    let details = market::path_info(&career_path)
        .ok_or_else(|| AppError::NotFound(format!("Unknown career path '{career_path}'")))?;
    Ok(Json(MarketResponse { snapshot, details }))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::llm_client::{LlmError, TextModel};
    use crate::routes::build_router;
    use crate::session::SessionStore;
    use crate::skills::gap::CatalogGapAnalyzer;
    use crate::state::AppState;

    /// Counts calls; replies with a fixed body.
    struct CountingModel {
        calls: Mutex<u32>,
        reply: String,
    }

    #[async_trait]
    impl TextModel for CountingModel {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            *self.calls.lock().unwrap() += 1;
            Ok(self.reply.clone())
        }
    }

    fn test_state(reply: &str) -> (AppState, Arc<CountingModel>) {
        let model = Arc::new(CountingModel {
            calls: Mutex::new(0),
            reply: reply.to_string(),
        });
        let state = AppState {
            sessions: SessionStore::new(Duration::from_secs(60)),
            model: model.clone(),
            gap_analyzer: Arc::new(CatalogGapAnalyzer),
        };
        (state, model)
    }

    async fn send(
        state: AppState,
        method: &str,
        uri: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        };
        let response = build_router(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    const MODEL_REPLY: &str = r#"{
        "recommended_paths": [
            {
                "career_path": "Data Science",
                "match_score": 84,
                "reasoning": "ML interest plus a quantitative degree",
                "key_skills_required": ["Python", "SQL"],
                "market_outlook": "28% projected growth"
            }
        ]
    }"#;

    async fn create_session(state: &AppState) -> String {
        let (status, body) = send(state.clone(), "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["session_id"].as_str().unwrap().to_string()
    }

    fn profile_body() -> serde_json::Value {
        serde_json::json!({
            "full_name": "Asha Rao",
            "age": 24,
            "education": "BS CS",
            "technical_background": "Python internships"
        })
    }

    fn preferences_body() -> serde_json::Value {
        serde_json::json!({
            "interests": ["ML", "backend"],
            "work_style": "small teams",
            "learning_style": "project-based",
            "career_goals": "industry"
        })
    }

    #[tokio::test]
    async fn test_full_flow_produces_recommendations() {
        let (state, model) = test_state(MODEL_REPLY);
        let id = create_session(&state).await;

        let (status, _) = send(
            state.clone(),
            "PUT",
            &format!("/api/v1/sessions/{id}/profile"),
            Some(profile_body()),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(
            state.clone(),
            "PUT",
            &format!("/api/v1/sessions/{id}/preferences"),
            Some(preferences_body()),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(
            state.clone(),
            "POST",
            &format!("/api/v1/sessions/{id}/recommendations"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommended_paths"][0]["career_path"], "Data Science");
        assert_eq!(*model.calls.lock().unwrap(), 1);

        // The set is stored on the session.
        let (status, body) = send(
            state,
            "GET",
            &format!("/api/v1/sessions/{id}/recommendations"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(!body["recommended_paths"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_incomplete_profile_is_rejected_before_any_model_call() {
        let (state, model) = test_state(MODEL_REPLY);
        let id = create_session(&state).await;

        // Profile stored, preferences (interests etc.) missing.
        let (status, _) = send(
            state.clone(),
            "PUT",
            &format!("/api/v1/sessions/{id}/profile"),
            Some(profile_body()),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(
            state,
            "POST",
            &format!("/api/v1/sessions/{id}/recommendations"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(*model.calls.lock().unwrap(), 0, "no external call may be made");
    }

    #[tokio::test]
    async fn test_blank_profile_field_is_rejected_at_submission() {
        let (state, _) = test_state(MODEL_REPLY);
        let id = create_session(&state).await;

        let mut body = profile_body();
        body["education"] = serde_json::json!("   ");
        let (status, body) = send(
            state,
            "PUT",
            &format!("/api/v1/sessions/{id}/profile"),
            Some(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("education"));
    }

    #[tokio::test]
    async fn test_resubmission_replaces_previous_set() {
        let (state, model) = test_state(MODEL_REPLY);
        let id = create_session(&state).await;
        for (uri, payload) in [
            (format!("/api/v1/sessions/{id}/profile"), profile_body()),
            (
                format!("/api/v1/sessions/{id}/preferences"),
                preferences_body(),
            ),
        ] {
            send(state.clone(), "PUT", &uri, Some(payload)).await;
        }

        let uri = format!("/api/v1/sessions/{id}/recommendations");
        let (_, first) = send(state.clone(), "POST", &uri, None).await;
        let (_, second) = send(state.clone(), "POST", &uri, None).await;
        assert_eq!(*model.calls.lock().unwrap(), 2, "each submission is independent");
        assert_ne!(first["generated_at"], second["generated_at"]);

        let (_, stored) = send(state, "GET", &uri, None).await;
        assert_eq!(stored["generated_at"], second["generated_at"]);
    }

    #[tokio::test]
    async fn test_unknown_session_is_404() {
        let (state, _) = test_state(MODEL_REPLY);
        let (status, body) = send(
            state,
            "POST",
            &format!("/api/v1/sessions/{}/recommendations", uuid::Uuid::new_v4()),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_market_endpoint_serves_catalog() {
        let (state, _) = test_state(MODEL_REPLY);
        let (status, body) = send(state, "GET", "/api/v1/market/Data%20Science", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["snapshot"]["career_path"], "Data Science");
        assert_eq!(body["snapshot"]["demand_score"], 90);
        assert!(!body["details"]["skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_market_unknown_path_is_404() {
        let (state, _) = test_state(MODEL_REPLY);
        let (status, _) = send(state, "GET", "/api/v1/market/Astronaut", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

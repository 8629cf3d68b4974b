pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::consultation::handlers as consultation;
use crate::profile::handlers as profile;
use crate::recommendation::handlers as recommendation;
use crate::roadmap::handlers as roadmap;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sessions
        .route("/api/v1/sessions", post(profile::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            delete(profile::handle_delete_session),
        )
        // Profile Collector
        .route(
            "/api/v1/sessions/:id/profile",
            get(profile::handle_get_profile).put(profile::handle_put_profile),
        )
        .route(
            "/api/v1/sessions/:id/preferences",
            put(profile::handle_put_preferences),
        )
        // Recommendations
        .route(
            "/api/v1/sessions/:id/recommendations",
            post(recommendation::handle_generate_recommendations)
                .get(recommendation::handle_get_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/career-path",
            post(recommendation::handle_select_path),
        )
        // Learning roadmap
        .route(
            "/api/v1/sessions/:id/roadmap",
            post(roadmap::handle_generate_roadmap).get(roadmap::handle_get_roadmap),
        )
        // Skills gap
        .route(
            "/api/v1/sessions/:id/skills-gap",
            post(skills::handle_analyze_gap).get(skills::handle_get_gap),
        )
        // Consultation Q&A
        .route(
            "/api/v1/sessions/:id/consultation",
            post(consultation::handle_ask)
                .get(consultation::handle_get_history)
                .delete(consultation::handle_clear_history),
        )
        // Market catalog
        .route(
            "/api/v1/market/:career_path",
            get(recommendation::handle_get_market),
        )
        .with_state(state)
}

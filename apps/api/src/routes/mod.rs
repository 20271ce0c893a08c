pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/assessment/questions",
            get(handlers::handle_get_questions),
        )
        .route("/api/v1/therapists", get(handlers::handle_list_therapists))
        .route("/api/v1/matches", post(handlers::handle_preview_matches))
        .route(
            "/api/v1/assessments",
            post(handlers::handle_submit_assessment),
        )
        .route(
            "/api/v1/assessments/latest",
            get(handlers::handle_get_latest_assessment),
        )
        .route(
            "/api/v1/assessments/selection",
            put(handlers::handle_select_therapist),
        )
        .with_state(state)
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::charts::handlers as charts;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(catalog::handle_index))
        .route("/api/v1/skills", get(catalog::handle_list_skills))
        .route("/analyze", post(matching::handle_analyze))
        .route("/role/:title", get(charts::handle_role_details))
        .with_state(state)
}

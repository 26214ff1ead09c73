pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::samples::handlers as samples;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis pipeline
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/summary", post(handlers::handle_summary))
        .route("/api/v1/bias", post(handlers::handle_bias))
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommendations),
        )
        // Demo transcripts
        .route("/api/v1/samples", get(samples::handle_list_samples))
        .route("/api/v1/samples/:slug", get(samples::handle_get_sample))
        .route(
            "/api/v1/samples/:slug/analyze",
            post(samples::handle_analyze_sample),
        )
        .with_state(state)
}

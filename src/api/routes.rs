//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, lesson_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /lesson={lesson_id}` - Theoretical step ids of a lesson
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// The lesson route is a single-segment capture; the handler checks the
/// `lesson=` prefix itself. Static routes take precedence over the capture.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/:segment", get(lesson_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

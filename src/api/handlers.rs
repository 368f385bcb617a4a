//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, LessonId, StatsResponse};
use crate::service::LessonService;
use crate::upstream::{HttpLessonApi, LessonApi};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub lessons: Arc<LessonService>,
}

impl AppState {
    pub fn new(lessons: LessonService) -> Self {
        Self {
            lessons: Arc::new(lessons),
        }
    }

    /// Builds the service with an HTTP upstream client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api: Arc<dyn LessonApi> = Arc::new(HttpLessonApi::new(
            config.upstream_base_url.clone(),
            config.upstream_timeout(),
        )?);
        Ok(Self::new(LessonService::from_config(config, api)?))
    }
}

/// Handler for GET /lesson={lesson_id}
///
/// Answers 400 for a non-numeric id, the upstream status with an empty body
/// for anything but 200, and a JSON array of theoretical step ids otherwise.
pub async fn lesson_handler(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> Result<Response> {
    let lesson_id = match LessonId::from_segment(&segment) {
        Some(parsed) => parsed?,
        None => return Ok(StatusCode::NOT_FOUND.into_response()),
    };

    let result = state.lessons.get_lesson(lesson_id.as_str()).await?;

    match result.steps {
        Some(steps) if result.is_success() => Ok(Json(steps).into_response()),
        _ => Ok(StatusCode::from_u16(result.status)
            .unwrap_or(StatusCode::BAD_GATEWAY)
            .into_response()),
    }
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.lessons.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

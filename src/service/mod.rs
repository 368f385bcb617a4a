//! Service Module
//!
//! Domain logic between the HTTP adapter and the upstream API.
//!
//! # Flow
//! `LessonService::get_lesson` -> lesson TTL cache -> `LessonApi::fetch_lesson`
//! -> `StepFetcher` per step -> `LessonApi::fetch_step` on stale or missing entries.

mod fetcher;
mod lessons;

pub use fetcher::StepFetcher;
pub use lessons::{LessonResult, LessonService, ServiceStats};

//! Lesson Cache - caching proxy for lesson step content
//!
//! Serves the theoretical steps of a lesson while keeping upstream calls to a
//! minimum through an LRU cache invalidated by the lesson's update date.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{Error, Result};
pub use service::{LessonResult, LessonService, StepFetcher};
pub use tasks::spawn_cleanup_task;

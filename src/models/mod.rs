//! Request and Response models for the HTTP API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! parsing path input and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::LessonId;
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, StatsResponse};

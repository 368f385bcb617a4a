//! API Module
//!
//! HTTP handlers and routing for the lesson cache.
//!
//! # Endpoints
//! - `GET /lesson={lesson_id}` - Theoretical step ids of a lesson
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;

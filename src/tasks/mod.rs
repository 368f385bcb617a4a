//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Lesson cleanup: Drops expired lesson results at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;

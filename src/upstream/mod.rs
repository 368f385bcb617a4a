//! Upstream Module
//!
//! The outbound side of the service: the lessons API seen through the
//! `LessonApi` trait, its HTTP implementation, and the wire models.

mod client;
pub mod models;

pub use client::HttpLessonApi;
pub use models::{LessonRecord, LessonsPage, StepsPage};

use async_trait::async_trait;

use crate::error::Result;

// == Reply ==
/// Outcome of an upstream call that reached the server.
///
/// Transport failures and undecodable bodies are reported through the outer
/// `Result` instead, so they can never be mistaken for a cacheable answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply<T> {
    /// 200 with a decoded body
    Ok(T),
    /// 403, access denied
    Forbidden,
    /// Any other status code
    Status(u16),
}

// == Lesson API ==
/// Read access to lessons and steps.
#[async_trait]
pub trait LessonApi: Send + Sync {
    /// `GET /api/lessons/{id}`
    async fn fetch_lesson(&self, lesson_id: &str) -> Result<Reply<LessonsPage>>;

    /// `GET /api/steps/{id}`
    async fn fetch_step(&self, step_id: u64) -> Result<Reply<StepsPage>>;
}

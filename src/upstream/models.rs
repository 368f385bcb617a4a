//! Wire models for the upstream lessons API
//!
//! Only the fields the service reads are declared; everything else in the
//! upstream payloads is ignored by serde.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Format of `update_date` in lesson payloads.
pub const UPDATE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Body of `GET /api/lessons/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LessonsPage {
    pub lessons: Vec<LessonRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LessonRecord {
    pub update_date: String,
    pub steps: Vec<u64>,
}

/// Body of `GET /api/steps/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct StepsPage {
    pub steps: Vec<StepRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StepRecord {
    pub block: Block,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Block {
    pub name: String,
}

impl LessonsPage {
    /// The single lesson the endpoint returns.
    pub fn into_lesson(self) -> Result<LessonRecord> {
        self.lessons
            .into_iter()
            .next()
            .ok_or_else(|| Error::MalformedResponse("lessons array is empty".to_string()))
    }
}

impl StepsPage {
    /// Block name of the single step the endpoint returns.
    pub fn block_name(&self) -> Result<&str> {
        self.steps
            .first()
            .map(|step| step.block.name.as_str())
            .ok_or_else(|| Error::MalformedResponse("steps array is empty".to_string()))
    }
}

impl LessonRecord {
    /// `update_date` as a Unix timestamp, read as UTC.
    pub fn update_timestamp(&self) -> Result<i64> {
        parse_update_date(&self.update_date)
    }
}

pub fn parse_update_date(raw: &str) -> Result<i64> {
    NaiveDateTime::parse_from_str(raw, UPDATE_DATE_FORMAT)
        .map(|dt| dt.and_utc().timestamp())
        .map_err(|e| Error::MalformedResponse(format!("bad update_date '{}': {}", raw, e)))
}

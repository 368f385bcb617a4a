//! Request models for the HTTP API
//!
//! Defines validated input taken from request paths.

use std::fmt;

use crate::error::{Error, Result};

/// Prefix of the single path segment served by the lesson route.
pub const LESSON_SEGMENT_PREFIX: &str = "lesson=";

/// A lesson id made only of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LessonId(String);

impl LessonId {
    /// Validates a raw lesson id.
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(Error::InvalidLessonId(raw.to_string()))
        }
    }

    /// Extracts the id from a `lesson=<id>` path segment.
    ///
    /// Returns `None` when the segment is not a lesson segment at all, so the
    /// caller can answer 404 instead of 400.
    pub fn from_segment(segment: &str) -> Option<Result<Self>> {
        segment
            .strip_prefix(LESSON_SEGMENT_PREFIX)
            .map(Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

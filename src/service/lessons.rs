//! Lesson Service
//!
//! Resolves a lesson id to the ids of its theoretical steps. Whole results are
//! kept for a fixed TTL; step classifications live in the freshness-aware
//! `StepFetcher` and survive across lesson results.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, StepClass, TtlCache};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::service::StepFetcher;
use crate::upstream::{LessonApi, Reply};

// == Lesson Result ==
/// Status code and step ids reported for a lesson.
///
/// `steps` is `None` when the lessons endpoint itself answered with a non-200
/// status, and `Some(vec![])` when a step was forbidden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonResult {
    pub status: u16,
    pub steps: Option<Vec<u64>>,
}

impl LessonResult {
    pub fn ok(steps: Vec<u64>) -> Self {
        Self {
            status: 200,
            steps: Some(steps),
        }
    }

    pub fn forbidden() -> Self {
        Self {
            status: 403,
            steps: Some(Vec::new()),
        }
    }

    pub fn status_only(status: u16) -> Self {
        Self {
            status,
            steps: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

// == Service Stats ==
#[derive(Debug, Clone, Serialize)]
pub struct ServiceStats {
    pub steps: CacheStats,
    pub lessons: CacheStats,
}

// == Lesson Service ==
pub struct LessonService {
    api: Arc<dyn LessonApi>,
    steps: StepFetcher,
    lessons: Mutex<TtlCache<LessonResult>>,
}

impl LessonService {
    // == Constructor ==
    /// Fails with `InvalidCapacity` if either capacity is zero.
    pub fn new(
        api: Arc<dyn LessonApi>,
        step_cache_max_keys: usize,
        lesson_cache_max_keys: usize,
        lesson_ttl: Duration,
    ) -> Result<Self> {
        Ok(Self {
            api,
            steps: StepFetcher::new(step_cache_max_keys)?,
            lessons: Mutex::new(TtlCache::new(lesson_cache_max_keys, lesson_ttl)?),
        })
    }

    pub fn from_config(config: &Config, api: Arc<dyn LessonApi>) -> Result<Self> {
        Self::new(
            api,
            config.step_cache_max_keys,
            config.lesson_cache_max_keys,
            config.lesson_ttl(),
        )
    }

    // == Get Lesson ==
    /// Returns the theoretical steps of `lesson_id`.
    ///
    /// Results, including non-200 statuses and forbidden lessons, are served
    /// from the lesson cache until the TTL elapses. Upstream errors are returned
    /// as `Err` and nothing is cached for them.
    pub async fn get_lesson(&self, lesson_id: &str) -> Result<LessonResult> {
        let cached = self.lessons.lock().get(lesson_id);
        if let Some(result) = cached {
            debug!(lesson_id, status = result.status, "lesson cache hit");
            return Ok(result);
        }

        let result = self.resolve(lesson_id).await.map_err(|e| {
            warn!(lesson_id, error = %e, "failed to resolve lesson");
            e
        })?;

        self.lessons
            .lock()
            .insert(lesson_id.to_string(), result.clone());
        Ok(result)
    }

    async fn resolve(&self, lesson_id: &str) -> Result<LessonResult> {
        let page = match self.api.fetch_lesson(lesson_id).await? {
            Reply::Ok(page) => page,
            Reply::Forbidden => return Ok(LessonResult::status_only(403)),
            Reply::Status(status) => {
                debug!(lesson_id, status, "lesson endpoint returned non-success status");
                return Ok(LessonResult::status_only(status));
            }
        };

        let lesson = page.into_lesson()?;
        let freshness = lesson.update_timestamp()?;

        let mut theoretical = Vec::new();
        for step_id in lesson.steps {
            match self
                .steps
                .classify_step(&*self.api, step_id, freshness)
                .await
            {
                Ok(StepClass::Theoretical(id)) => theoretical.push(id),
                Ok(_) => {}
                Err(Error::Forbidden) => {
                    info!(lesson_id, step_id, "step access forbidden");
                    return Ok(LessonResult::forbidden());
                }
                Err(e) => return Err(e),
            }
        }

        Ok(LessonResult::ok(theoretical))
    }

    // == Purge Expired ==
    /// Drops lesson results whose TTL has elapsed.
    pub fn purge_expired(&self) -> usize {
        self.lessons.lock().purge_expired()
    }

    pub fn stats(&self) -> ServiceStats {
        ServiceStats {
            steps: self.steps.stats(),
            lessons: self.lessons.lock().stats(),
        }
    }
}

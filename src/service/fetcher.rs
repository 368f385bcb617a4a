//! Step Fetcher
//!
//! Classifies steps through an LRU cache whose entries are invalidated by the
//! lesson's update timestamp rather than by a timer.

use std::future::Future;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheStats, LruStore, StepClass, StepEntry};
use crate::error::{Error, Result};
use crate::upstream::{LessonApi, Reply, StepsPage};

// == Step Fetcher ==
/// Freshness-aware cache of step classifications.
///
/// The store and its tracker sit behind one mutex; each cache operation is a
/// single critical section and the lock is never held while waiting on the
/// upstream API. Two concurrent misses for the same step both go upstream and
/// the last write wins.
#[derive(Debug)]
pub struct StepFetcher {
    cache: Mutex<LruStore<StepEntry>>,
}

impl StepFetcher {
    pub fn new(max_keys: usize) -> Result<Self> {
        Ok(Self {
            cache: Mutex::new(LruStore::new(max_keys)?),
        })
    }

    // == Get Or Fetch ==
    /// Returns the classification of `step_id` valid for `required_freshness`.
    ///
    /// A cached entry whose freshness is at least `required_freshness` is served
    /// without calling `fetch`. Otherwise `fetch` runs and its outcome is stored
    /// under `required_freshness`, including access denials. Transport errors,
    /// unexpected statuses and malformed bodies are returned without touching
    /// the cache.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        step_id: u64,
        required_freshness: i64,
        fetch: F,
    ) -> Result<StepClass>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Reply<StepsPage>>>,
    {
        let key = step_id.to_string();

        if let Some(entry) = self.lookup(&key, required_freshness) {
            debug!(step_id, freshness = entry.freshness, "step cache hit");
            return match entry.class {
                StepClass::Forbidden => Err(Error::Forbidden),
                class => Ok(class),
            };
        }

        debug!(step_id, required_freshness, "step cache miss");
        let class = match fetch().await? {
            Reply::Ok(page) => StepClass::from_block(step_id, page.block_name()?),
            Reply::Forbidden => StepClass::Forbidden,
            Reply::Status(status) => {
                return Err(Error::Upstream(format!(
                    "unexpected status {} for step {}",
                    status, step_id
                )));
            }
        };

        self.cache
            .lock()
            .set(key, StepEntry::new(required_freshness, class));

        match class {
            StepClass::Forbidden => Err(Error::Forbidden),
            class => Ok(class),
        }
    }

    /// Classifies `step_id` using `api` on a miss.
    pub async fn classify_step(
        &self,
        api: &dyn LessonApi,
        step_id: u64,
        required_freshness: i64,
    ) -> Result<StepClass> {
        self.get_or_fetch(step_id, required_freshness, || api.fetch_step(step_id))
            .await
    }

    /// Fresh entry for `key`, recording the hit or miss.
    fn lookup(&self, key: &str, required_freshness: i64) -> Option<StepEntry> {
        let mut cache = self.cache.lock();
        let fresh = if cache.exists(key) {
            cache
                .get(key)
                .ok()
                .filter(|entry| entry.is_fresh_for(required_freshness))
        } else {
            None
        };

        if fresh.is_some() {
            cache.record_hit();
        } else {
            cache.record_miss();
        }
        fresh
    }

    /// Cached entry for a step, without promoting it.
    pub fn peek(&self, step_id: u64) -> Option<StepEntry> {
        self.cache.lock().peek(&step_id.to_string()).copied()
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }
}

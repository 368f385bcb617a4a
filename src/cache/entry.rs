//! Cache Entry Module
//!
//! Entry shapes stored in the two caches: step classifications keyed by
//! freshness, and lesson results that expire after a fixed TTL.

use std::time::{Duration, Instant};

// == Step Classification ==
/// What the upstream API told us about a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepClass {
    /// Text block step, carrying its id
    Theoretical(u64),
    /// Video, quiz or any other non-text block
    NonTheoretical,
    /// Upstream denied access to the step
    Forbidden,
}

impl StepClass {
    /// Classifies a step from its content block name.
    pub fn from_block(step_id: u64, block_name: &str) -> Self {
        if block_name == "text" {
            StepClass::Theoretical(step_id)
        } else {
            StepClass::NonTheoretical
        }
    }
}

// == Step Entry ==
/// A step classification together with the freshness it was fetched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEntry {
    /// Unix timestamp of the lesson update the classification is valid for
    pub freshness: i64,
    pub class: StepClass,
}

impl StepEntry {
    pub fn new(freshness: i64, class: StepClass) -> Self {
        Self { freshness, class }
    }

    /// An entry serves any request whose freshness requirement is not newer than it.
    pub fn is_fresh_for(&self, required_freshness: i64) -> bool {
        self.freshness >= required_freshness
    }
}

// == Timed Entry ==
/// A value that stops being served once its TTL has elapsed.
#[derive(Debug, Clone)]
pub struct TimedEntry<V> {
    pub value: V,
    pub expires_at: Instant,
}

impl<V> TimedEntry<V> {
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its expiration time.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

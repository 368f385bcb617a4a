//! TTL Cache Module
//!
//! Capacity-bounded LRU cache whose entries also expire after a fixed TTL.
//! Used for whole-lesson results, which are refreshed on a timer instead of
//! by the lesson's update date.

use std::time::Duration;

use crate::cache::{CacheStats, LruStore, TimedEntry};
use crate::error::Result;

// == TTL Cache ==
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: LruStore<TimedEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(max_keys: usize, ttl: Duration) -> Result<Self> {
        Ok(Self {
            entries: LruStore::new(max_keys)?,
            ttl,
        })
    }

    // == Get ==
    /// Returns the cached value if present and not yet expired.
    ///
    /// Expired entries are removed on the way out and counted as misses.
    pub fn get(&mut self, key: &str) -> Option<V> {
        if !self.entries.exists(key) {
            self.entries.record_miss();
            return None;
        }

        match self.entries.get(key) {
            Ok(entry) if !entry.is_expired() => {
                self.entries.record_hit();
                Some(entry.value)
            }
            _ => {
                self.entries.delete(key);
                self.entries.record_expirations(1);
                self.entries.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `value` for the configured TTL, resetting any previous lifetime.
    ///
    /// A new key on a full cache first drops expired entries, so a live entry
    /// is only evicted when nothing has expired.
    pub fn insert(&mut self, key: String, value: V) {
        if !self.entries.exists(&key) && self.entries.len() >= self.entries.max_keys() {
            self.purge_expired();
        }
        self.entries.set(key, TimedEntry::new(value, self.ttl));
    }

    // == Purge Expired ==
    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let expired: Vec<String> = self
            .entries
            .stored_keys()
            .into_iter()
            .filter(|key| {
                // Peek without promoting: an expired entry is about to go anyway.
                self.entries
                    .peek(key)
                    .map(|entry| entry.is_expired())
                    .unwrap_or(false)
            })
            .collect();

        for key in &expired {
            self.entries.delete(key);
        }
        self.entries.record_expirations(expired.len());
        expired.len()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.entries.stats()
    }
}

//! LRU Store Module
//!
//! Pairs a `BoundedStore` with an `LruTracker` so every read and write keeps
//! recency order current and capacity is enforced on insert.

use tracing::debug;

use crate::cache::{BoundedStore, CacheStats, LruTracker};
use crate::error::Result;

// == LRU Store ==
/// Capacity-bounded store with least-recently-used eviction.
///
/// The tracker's key set always equals the store's key set. Callers that share
/// an `LruStore` between tasks must wrap it in a single lock so that each method
/// call is one critical section.
#[derive(Debug)]
pub struct LruStore<V> {
    store: BoundedStore<V>,
    lru: LruTracker,
    stats: CacheStats,
}

impl<V: Clone> LruStore<V> {
    // == Constructor ==
    /// Fails with `InvalidCapacity` when `max_keys` is zero.
    pub fn new(max_keys: usize) -> Result<Self> {
        Ok(Self {
            store: BoundedStore::new(),
            lru: LruTracker::new(max_keys)?,
            stats: CacheStats::new(),
        })
    }

    pub fn exists(&self, key: &str) -> bool {
        self.store.exists(key)
    }

    // == Get ==
    /// Reads a value and promotes its key to most recently used.
    pub fn get(&mut self, key: &str) -> Result<V> {
        let value = self.store.get(key)?;
        self.lru.record_access(key);
        Ok(value)
    }

    /// Borrows a value without touching recency order.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.store.peek(key)
    }

    // == Set ==
    /// Writes a value, evicting the least recently used key first if the
    /// store is full and `key` is new.
    pub fn set(&mut self, key: String, value: V) {
        if let Some(evicted) = self.lru.record_write(&key) {
            self.store.delete(&evicted);
            self.stats.record_eviction();
            debug!(key = %evicted, "evicted least recently used entry");
        }
        self.store.set(key, value);
        self.stats.set_total_entries(self.store.len());
    }

    // == Delete ==
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.store.delete(key);
        if removed {
            self.lru.remove(key);
            self.stats.set_total_entries(self.store.len());
        }
        removed
    }

    pub fn record_hit(&mut self) {
        self.stats.record_hit();
    }

    pub fn record_miss(&mut self) {
        self.stats.record_miss();
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.stats.record_expirations(count);
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.store.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn max_keys(&self) -> usize {
        self.lru.max_keys()
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.lru.keys().cloned().collect()
    }

    /// Keys held by the underlying store, unordered.
    pub fn stored_keys(&self) -> Vec<String> {
        self.store.keys().cloned().collect()
    }
}

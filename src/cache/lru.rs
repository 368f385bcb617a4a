//! LRU Tracker Module
//!
//! Maintains recency order over a store's keys and decides what to evict.

use std::collections::VecDeque;

use crate::error::{Error, Result};

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// The queue never holds more than `max_keys` keys and never holds a key twice.
#[derive(Debug)]
pub struct LruTracker {
    order: VecDeque<String>,
    max_keys: usize,
}

impl LruTracker {
    // == Constructor ==
    /// Creates an empty tracker holding at most `max_keys` keys.
    pub fn new(max_keys: usize) -> Result<Self> {
        if max_keys < 1 {
            return Err(Error::InvalidCapacity(max_keys));
        }
        Ok(Self {
            order: VecDeque::with_capacity(max_keys),
            max_keys,
        })
    }

    // == Record Access ==
    /// Promotes a key that was just read to the front.
    ///
    /// Only meaningful for keys that exist in the store; unknown keys are ignored.
    pub fn record_access(&mut self, key: &str) {
        if let Some(pos) = self.position(key) {
            if let Some(k) = self.order.remove(pos) {
                self.order.push_front(k);
            }
        }
    }

    // == Record Write ==
    /// Records a write of `key` and returns the key that must be evicted, if any.
    ///
    /// Existing keys are promoted. A new key arriving at a full queue pushes out
    /// the least recently used key first.
    pub fn record_write(&mut self, key: &str) -> Option<String> {
        if self.position(key).is_some() {
            self.record_access(key);
            return None;
        }

        let evicted = if self.order.len() == self.max_keys {
            self.order.pop_back()
        } else {
            None
        };
        self.order.push_front(key.to_string());
        evicted
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.back()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|k| k == key)
    }
}

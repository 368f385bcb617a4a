//! Bounded Store Module
//!
//! Plain key-value storage. Capacity is enforced by the LRU tracker that
//! sits in front of it, never by the store itself.

use std::collections::HashMap;

use crate::error::{Error, Result};

// == Bounded Store ==
/// In-memory key-value storage.
#[derive(Debug)]
pub struct BoundedStore<V> {
    entries: HashMap<String, V>,
}

impl<V: Clone> BoundedStore<V> {
    // == Constructor ==
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Exists ==
    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Result<V> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    /// Borrows the value stored under `key`.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: String, value: V) {
        self.entries.insert(key, value);
    }

    // == Delete ==
    /// Removes `key`. Returns whether it was present.
    pub fn delete(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the stored keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl<V: Clone> Default for BoundedStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

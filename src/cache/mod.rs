//! Cache Module
//!
//! In-memory caching primitives: a plain store, an LRU tracker that bounds it,
//! and the two composites the service is built on.

mod entry;
mod lru;
mod stats;
mod store;
mod tracked;
mod ttl;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::{StepClass, StepEntry, TimedEntry};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::BoundedStore;
pub use tracked::LruStore;
pub use ttl::TtlCache;

//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the LRU and freshness invariants over random
//! operation sequences.

use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::cache::{LruStore, StepClass};
use crate::error::{Error, Result};
use crate::service::StepFetcher;
use crate::upstream::models::{Block, StepRecord};
use crate::upstream::{Reply, StepsPage};

// == Strategies ==
/// Small key alphabet so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Delete { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        2 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
    ]
}

fn unique_keys(keys: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keys.into_iter().filter(|k| seen.insert(k.clone())).collect()
}

fn text_page() -> StepsPage {
    StepsPage {
        steps: vec![StepRecord {
            block: Block {
                name: "text".to_string(),
            },
        }],
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // After any sequence of operations the store holds at most `capacity` keys,
    // the recency queue holds exactly the store's keys, and no key twice.
    #[test]
    fn prop_capacity_and_key_set_invariant(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut store = LruStore::new(capacity).unwrap();

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(key, value),
                CacheOp::Get { key } => { let _ = store.get(&key); }
                CacheOp::Delete { key } => { store.delete(&key); }
            }

            prop_assert!(store.len() <= capacity);

            let queue = store.keys_by_recency();
            let queued: HashSet<String> = queue.iter().cloned().collect();
            prop_assert_eq!(queued.len(), queue.len(), "duplicate key in recency queue");

            let stored: HashSet<String> = store.stored_keys().into_iter().collect();
            prop_assert_eq!(queued, stored);
        }
    }

    // Filling to capacity then writing a new key evicts the first key written.
    #[test]
    fn prop_lru_eviction_order(
        keys in prop::collection::vec("[a-z]{1,8}", 2..10),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys = unique_keys(keys);
        prop_assume!(keys.len() >= 2);

        let capacity = keys.len();
        let mut store = LruStore::new(capacity).unwrap();
        for key in &keys {
            store.set(key.clone(), 0u32);
        }

        store.set(new_key.clone(), 1);

        prop_assert_eq!(store.len(), capacity);
        prop_assert!(!store.exists(&keys[0]));
        prop_assert!(store.exists(&new_key));
        for key in keys.iter().skip(1) {
            prop_assert!(store.exists(key));
        }
    }

    // Reading the oldest key protects it; the next oldest goes instead.
    #[test]
    fn prop_lru_access_tracking(
        keys in prop::collection::vec("[a-z]{1,8}", 3..8),
        new_key in "[A-Z]{1,8}"
    ) {
        let keys = unique_keys(keys);
        prop_assume!(keys.len() >= 3);

        let mut store = LruStore::new(keys.len()).unwrap();
        for key in &keys {
            store.set(key.clone(), 0u32);
        }

        store.get(&keys[0]).unwrap();
        store.set(new_key.clone(), 1);

        prop_assert!(store.exists(&keys[0]));
        prop_assert!(!store.exists(&keys[1]));
        prop_assert!(store.exists(&new_key));
    }

    // A step cached at freshness T is served for any requirement <= T and
    // refetched for any requirement > T.
    #[test]
    fn prop_staleness_boundary(cached_at in -1_000i64..1_000, required in -1_000i64..1_000) {
        let fetcher = StepFetcher::new(4).unwrap();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let fetch = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, Error>(Reply::Ok(text_page()))
        };

        let (first, second): (Result<StepClass>, Result<StepClass>) = tokio_test::block_on(async {
            let first = fetcher.get_or_fetch(1, cached_at, fetch).await;
            let second = fetcher.get_or_fetch(1, required, fetch).await;
            (first, second)
        });

        prop_assert_eq!(first.unwrap(), StepClass::Theoretical(1));
        prop_assert_eq!(second.unwrap(), StepClass::Theoretical(1));
        let expected_calls = if required <= cached_at { 1 } else { 2 };
        prop_assert_eq!(calls.load(Ordering::SeqCst), expected_calls);
    }

    // A forbidden step stays forbidden without upstream calls for any
    // requirement not newer than the freshness it was denied at.
    #[test]
    fn prop_forbidden_memoization(denied_at in 0i64..10_000, offsets in prop::collection::vec(0i64..10_000, 1..10)) {
        let fetcher = StepFetcher::new(4).unwrap();
        let calls = AtomicUsize::new(0);
        let counter = &calls;
        let fetch = move || async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<Reply<StepsPage>, Error>(Reply::Forbidden)
        };

        tokio_test::block_on(async {
            let _ = fetcher.get_or_fetch(9, denied_at, fetch).await;
            for offset in &offsets {
                let result = fetcher.get_or_fetch(9, denied_at - offset, fetch).await;
                assert!(matches!(result, Err(Error::Forbidden)));
            }
        });

        prop_assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}

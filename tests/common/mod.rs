//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

// ============================================================================
// FIXTURES
// ============================================================================

/// `{x: 1, y: 2, z: 3}`.
pub fn xyz() -> HashMap<&'static str, i32> {
    map(&[("x", 1), ("y", 2), ("z", 3)])
}

/// Build a `HashMap` from literal pairs.
pub fn map<K, V>(pairs: &[(K, V)]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pairs.iter().cloned().collect()
}

/// Build a `BTreeMap` from literal pairs.
pub fn ordered<K, V>(pairs: &[(K, V)]) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    pairs.iter().cloned().collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that `map` has exactly the keys in `expected`, ignoring order and
/// duplicates.
pub fn assert_keys<K, V>(map: &HashMap<K, V>, expected: &[K])
where
    K: Eq + Hash + Ord + Clone + Debug,
{
    let mut actual: Vec<K> = map.keys().cloned().collect();
    actual.sort();
    let mut wanted = expected.to_vec();
    wanted.sort();
    wanted.dedup();
    assert_eq!(actual, wanted, "key sets differ");
}

/// Assert the chunk shape: all full except a non-empty tail, covering `items`
/// in order.
pub fn assert_chunked<T: PartialEq + Debug>(items: &[T], split: &[&[T]], size: usize) {
    let total: usize = split.iter().map(|chunk| chunk.len()).sum();
    assert_eq!(total, items.len(), "chunks don't cover the input");

    if let Some((last, full)) = split.split_last() {
        for (i, chunk) in full.iter().enumerate() {
            assert_eq!(chunk.len(), size, "chunk {} is short", i);
        }
        assert!(!last.is_empty() && last.len() <= size, "bad tail chunk");
    }

    let flat: Vec<&T> = split.iter().flat_map(|chunk| chunk.iter()).collect();
    let original: Vec<&T> = items.iter().collect();
    assert_eq!(flat, original, "chunks reorder the input");
}

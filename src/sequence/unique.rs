// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Uniqueness checks over sequences.
//!
//! [`are_unique`] is the fast path: a hash set, stop at the first repeat.
//! [`are_unique_by_eq`] handles element types that only implement
//! `PartialEq` (floats, closures-as-data, foreign types) with a pairwise scan.

use std::collections::HashSet;
use std::hash::Hash;

/// True if no element of `items` occurs more than once.
///
/// Stops at the first repeated element. An empty sequence is unique.
///
/// ```
/// use dictkit::are_unique;
///
/// assert!(are_unique([1, 2, 3]));
/// assert!(!are_unique([1, 2, 3, 2]));
/// assert!(are_unique(Vec::<i32>::new()));
/// ```
pub fn are_unique<I>(items: I) -> bool
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let iter = items.into_iter();
    let mut seen = HashSet::with_capacity(iter.size_hint().0);
    for item in iter {
        if !seen.insert(item) {
            return false;
        }
    }
    true
}

/// Same answer as [`are_unique`] for elements that only support `==`.
///
/// Quadratic in the slice length.
pub fn are_unique_by_eq<T: PartialEq>(items: &[T]) -> bool {
    items
        .iter()
        .enumerate()
        .all(|(i, item)| !items[..i].contains(item))
}

/// Elements that occur more than once, each reported once, in the order their
/// first repeat is seen.
pub fn duplicates<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if !seen.insert(item.clone()) && reported.insert(item.clone()) {
            out.push(item);
        }
    }
    out
}

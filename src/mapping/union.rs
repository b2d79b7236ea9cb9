// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Union of two maps.
//!
//! The second map wins on shared keys. In strict mode shared keys are an
//! error instead, detected with the same uniqueness check exposed as
//! [`are_unique`](crate::are_unique) over the combined key sequence. The check
//! runs before any output is built, so a rejected union allocates nothing
//! beyond the key scan.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::Mapping;
use crate::contracts::check_union_keys;
use crate::error::{Error, Result};
use crate::sequence::unique::{are_unique, duplicates};

/// Merge `first` and `second` into a new map.
///
/// Non-strict: every key of both maps, `second`'s value on conflict. Never
/// fails. Strict: [`Error::KeyCollision`] listing the shared keys if the key
/// sets intersect, otherwise the same result as non-strict.
///
/// ```
/// use std::collections::HashMap;
/// use dictkit::union;
///
/// let a: HashMap<_, _> = [("x", 1), ("y", 2)].into_iter().collect();
/// let b: HashMap<_, _> = [("x", 9)].into_iter().collect();
///
/// let merged: HashMap<_, _> = union(&a, &b, false).unwrap();
/// assert_eq!(merged, [("x", 9), ("y", 2)].into_iter().collect());
///
/// assert!(union::<_, _, _, _, HashMap<_, _>>(&a, &b, true).is_err());
/// ```
pub fn union<M1, M2, K, V, O>(first: &M1, second: &M2, strict: bool) -> Result<O>
where
    M1: Mapping<K, V>,
    M2: Mapping<K, V>,
    K: Eq + Hash + Clone + Debug,
    V: Clone,
    O: FromIterator<(K, V)>,
{
    let combined_keys = move || {
        first
            .entries()
            .map(|(key, _)| key)
            .chain(second.entries().map(|(key, _)| key))
    };

    if strict && !are_unique(combined_keys()) {
        let shared = duplicates(combined_keys());
        debug!(collisions = shared.len(), "strict union: keys intersect");
        return Err(Error::key_collision(shared));
    }

    let pairs: Vec<(K, V)> = first
        .entries()
        .chain(second.entries())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if cfg!(debug_assertions) {
        let merged: HashSet<&K> = pairs.iter().map(|(key, _)| key).collect();
        check_union_keys(strict, first.len(), second.len(), merged.len());
    }

    // FromIterator inserts in order, so `second`'s entries overwrite `first`'s.
    Ok(pairs.into_iter().collect())
}

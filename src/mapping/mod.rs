// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Helpers that build new maps out of existing ones.
//!
//! Everything here reads its inputs through the [`Mapping`] trait and builds
//! its output through `FromIterator`, so a `BTreeMap` can be sliced into a
//! `HashMap` (or the other way round) without an intermediate copy. Inputs are
//! only borrowed; values are cloned into the result.

pub mod slice;
pub mod union;

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

pub use slice::{complement, slice, slice_or, slice_strict, SliceOptions};
pub use union::union;

/// Read-only view of a key-value map.
pub trait Mapping<K, V> {
    /// Iterator over `(key, value)` pairs.
    type Iter<'a>: Iterator<Item = (&'a K, &'a V)>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    /// Look up the value stored under `key`.
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Iterate over all entries, in the map's own order.
    fn entries(&self) -> Self::Iter<'_>;

    /// Number of entries.
    fn len(&self) -> usize;

    /// True if the map has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `key` is present.
    fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }
}

impl<K, V, S> Mapping<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Iter<'a>
        = std::collections::hash_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Mapping<K, V> for BTreeMap<K, V>
where
    K: Ord,
{
    type Iter<'a>
        = std::collections::btree_map::Iter<'a, K, V>
    where
        Self: 'a,
        K: 'a,
        V: 'a;

    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    fn entries(&self) -> Self::Iter<'_> {
        self.iter()
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

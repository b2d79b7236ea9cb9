// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sub-maps selected by key: [`slice`] keeps the listed keys, [`complement`]
//! drops them.
//!
//! A slice always has exactly the requested keys. What a key the source map
//! lacks turns into depends on [`SliceOptions`]: the configured default (or
//! `None`) in lenient mode, a [`Error::KeyNotFound`] in strict mode.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Mapping;
use crate::contracts::check_strict_slice;
use crate::error::{Error, Result};

/// How [`slice`] treats keys that the source map doesn't contain.
///
/// Plain data so it can sit inside a caller's own config struct:
///
/// ```
/// use dictkit::SliceOptions;
///
/// let opts: SliceOptions<i32> = SliceOptions::default().with_default(0);
/// assert!(!opts.strict);
/// assert_eq!(opts.default, Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceOptions<V> {
    /// Value for missing keys when not strict. `None` means "no value".
    pub default: Option<V>,
    /// Fail on the first missing key instead of filling in `default`.
    pub strict: bool,
}

impl<V> Default for SliceOptions<V> {
    fn default() -> Self {
        Self {
            default: None,
            strict: false,
        }
    }
}

impl<V> SliceOptions<V> {
    /// Lenient options with no default value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to strict mode.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Fill missing keys with `value` (ignored in strict mode).
    pub fn with_default(mut self, value: V) -> Self {
        self.default = Some(value);
        self
    }
}

/// Build a map containing exactly `keys`, with values taken from `map`.
///
/// Pairs come out in `keys` order, one per key. Duplicate keys collapse into
/// one entry only when `O` is a map, through its `FromIterator`; a `Vec`
/// output keeps every repeat. Values are `Option<V>` because a
/// missing key in lenient mode maps to `options.default`, which may itself be
/// `None`. In strict mode every value is `Some` and the first missing key (in
/// `keys` order) aborts with [`Error::KeyNotFound`].
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use dictkit::{slice, SliceOptions};
///
/// let map: HashMap<_, _> = [("y", 2), ("z", 3)].into_iter().collect();
///
/// let out: HashMap<_, _> = slice(&map, ["x", "y"], &SliceOptions::new()).unwrap();
/// assert_eq!(out, [("x", None), ("y", Some(2))].into_iter().collect());
///
/// let err = slice::<_, _, _, HashMap<_, _>>(&map, ["x"], &SliceOptions::new().strict());
/// assert!(err.is_err());
/// ```
pub fn slice<M, K, V, O>(
    map: &M,
    keys: impl IntoIterator<Item = K>,
    options: &SliceOptions<V>,
) -> Result<O>
where
    M: Mapping<K, V>,
    K: Eq + Hash + Debug,
    V: Clone,
    O: FromIterator<(K, Option<V>)>,
{
    let mut pairs = Vec::new();
    for key in keys {
        let value = match map.lookup(&key) {
            Some(value) => Some(value.clone()),
            None if options.strict => {
                debug!(key = ?key, "strict slice: key not found");
                return Err(Error::key_not_found(&key));
            }
            None => options.default.clone(),
        };
        pairs.push((key, value));
    }

    check_strict_slice(options.strict, pairs.iter().map(|(_, value)| value));
    Ok(pairs.into_iter().collect())
}

/// Lenient slice where every missing key gets `default`.
///
/// ```
/// use std::collections::HashMap;
/// use dictkit::slice_or;
///
/// let map: HashMap<_, _> = [("y", 2)].into_iter().collect();
/// let out: HashMap<_, _> = slice_or(&map, ["x", "y"], 0);
/// assert_eq!(out, [("x", 0), ("y", 2)].into_iter().collect());
/// ```
pub fn slice_or<M, K, V, O>(map: &M, keys: impl IntoIterator<Item = K>, default: V) -> O
where
    M: Mapping<K, V>,
    K: Eq + Hash,
    V: Clone,
    O: FromIterator<(K, V)>,
{
    keys.into_iter()
        .map(|key| {
            let value = map.lookup(&key).cloned().unwrap_or_else(|| default.clone());
            (key, value)
        })
        .collect()
}

/// Strict slice with plain values: every key in `keys` must be in `map`.
pub fn slice_strict<M, K, V, O>(map: &M, keys: impl IntoIterator<Item = K>) -> Result<O>
where
    M: Mapping<K, V>,
    K: Eq + Hash + Debug,
    V: Clone,
    O: FromIterator<(K, V)>,
{
    keys.into_iter()
        .map(|key| match map.lookup(&key) {
            Some(value) => Ok((key, value.clone())),
            None => {
                debug!(key = ?key, "strict slice: key not found");
                Err(Error::key_not_found(&key))
            }
        })
        .collect()
}

/// Build a map with every entry of `map` whose key is not in `keys`.
///
/// Keys in `keys` that `map` doesn't have are ignored.
///
/// ```
/// use std::collections::HashMap;
/// use dictkit::complement;
///
/// let map: HashMap<_, _> = [("x", 1), ("y", 2), ("z", 3)].into_iter().collect();
/// let out: HashMap<_, _> = complement(&map, ["x", "y", "nope"]);
/// assert_eq!(out, [("z", 3)].into_iter().collect());
/// ```
pub fn complement<M, K, V, O>(map: &M, keys: impl IntoIterator<Item = K>) -> O
where
    M: Mapping<K, V>,
    K: Eq + Hash + Clone,
    V: Clone,
    O: FromIterator<(K, V)>,
{
    let excluded: HashSet<K> = keys.into_iter().collect();
    map.entries()
        .filter(|(key, _)| !excluded.contains(*key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the strict-mode helpers.
//!
//! Only three things can go wrong in this crate: a strict slice asks for a key
//! the map doesn't have, a strict union sees the same key on both sides, or a
//! chunk size of zero. Errors coming out of caller callbacks (`each`, `raise`)
//! are never wrapped here; they keep the caller's own type.
//!
//! Keys are rendered with `Debug` when the error is built so `Error` stays
//! non-generic and can cross `?` boundaries into `anyhow` and friends.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by strict-mode helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A strict slice requested a key the map doesn't contain.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// A strict union found keys present in both maps.
    #[error("keys present in both maps: {}", .keys.join(", "))]
    KeyCollision { keys: Vec<String> },

    /// An argument outside its valid domain.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl Error {
    pub(crate) fn key_not_found<K: std::fmt::Debug + ?Sized>(key: &K) -> Self {
        Error::KeyNotFound {
            key: format!("{:?}", key),
        }
    }

    pub(crate) fn key_collision<'a, K, I>(keys: I) -> Self
    where
        K: std::fmt::Debug + 'a,
        I: IntoIterator<Item = &'a K>,
    {
        Error::KeyCollision {
            keys: keys.into_iter().map(|key| format!("{:?}", key)).collect(),
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime postcondition checks.
//!
//! Debug-mode assertions on the shape of each helper's output. They compile
//! to nothing in release builds (`debug_assert!`), so they can sit on the hot
//! path of every call.
//!
//! | Contract             | Guarantees                                           |
//! |----------------------|------------------------------------------------------|
//! | `check_strict_slice` | strict slices never contain a `None` value           |
//! | `check_union_keys`   | merged key count within `max(a, b)..=a + b`; strict  |
//! |                      | unions keep every key of both maps                   |
//! | `check_chunk_len`    | full chunks everywhere but the tail, tail non-empty  |

/// Strict slices fail on missing keys, so every value must be present.
#[inline]
pub fn check_strict_slice<'a, V: 'a>(
    strict: bool,
    values: impl IntoIterator<Item = &'a Option<V>>,
) {
    if cfg!(debug_assertions) && strict {
        debug_assert!(
            values.into_iter().all(Option::is_some),
            "strict slice produced a missing value"
        );
    }
}

/// A union of maps sized `first` and `second` holds between `max(first, second)`
/// and `first + second` distinct keys. A strict union passed the collision
/// check, so it must hold exactly `first + second`.
#[inline]
pub fn check_union_keys(strict: bool, first: usize, second: usize, merged: usize) {
    debug_assert!(
        first.max(second) <= merged && merged <= first + second,
        "union of {} and {} entries produced {} keys",
        first,
        second,
        merged
    );
    debug_assert!(
        !strict || merged == first + second,
        "strict union lost keys: {} + {} entries merged into {}",
        first,
        second,
        merged
    );
}

/// Chunk shape: exactly `size` elements, or `1..=size` for the final chunk.
#[inline]
pub fn check_chunk_len(len: usize, size: usize, is_last: bool) {
    debug_assert!(len >= 1, "empty chunk emitted");
    debug_assert!(len <= size, "chunk of {} exceeds size {}", len, size);
    debug_assert!(
        is_last || len == size,
        "short chunk of {} before the end (size {})",
        len,
        size
    );
}

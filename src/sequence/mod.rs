// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence helpers: uniqueness, for-each, chunking.
//!
//! Sequences are taken as `IntoIterator` wherever a single forward pass is
//! enough, and as slices where the helper needs index ranges (chunking,
//! equality-only uniqueness).

pub mod chunks;
pub mod each;
pub mod unique;

pub use chunks::{chunks, Chunks};
pub use each::each;
pub use unique::{are_unique, are_unique_by_eq, duplicates};

#[cfg(feature = "parallel")]
pub use chunks::par_chunks;
#[cfg(feature = "parallel")]
pub use each::par_each;

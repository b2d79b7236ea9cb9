//! Small generic helpers for maps and sequences.
//!
//! Slicing and complementing maps by key, merging two maps with optional
//! collision rejection, checking sequences for repeats, an eager fallible
//! for-each, fixed-size chunking, and a couple of helpers for failing from
//! expression position.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐     ┌───────────────────────┐
//! │       mapping        │     │       sequence        │
//! │ Mapping trait        │     │ unique: are_unique    │
//! │ slice: slice,        │────▶│ each:   each          │
//! │   complement         │     │ chunks: chunks        │
//! │ union: union         │     └───────────────────────┘
//! └──────────────────────┘                 │
//!            │                             │
//!            ▼                             ▼
//! ┌─────────────────────────────────────────────────────┐
//! │   error.rs (Error, Result)   contracts.rs (debug)    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Every helper is a pure function of its arguments: inputs are borrowed and
//! never mutated, results are freshly built. Only strict modes and chunking
//! can fail, with the errors in [`Error`].
//!
//! # Usage
//!
//! ```
//! use std::collections::HashMap;
//! use dictkit::{chunks, complement, union};
//!
//! let config: HashMap<_, _> = [("host", "db"), ("port", "5432"), ("pass", "x")]
//!     .into_iter()
//!     .collect();
//!
//! let public: HashMap<_, _> = complement(&config, ["pass"]);
//! let overrides: HashMap<_, _> = [("port", "6543")].into_iter().collect();
//! let merged: HashMap<_, _> = union(&public, &overrides, false).unwrap();
//! assert_eq!(merged["port"], "6543");
//!
//! let ids: Vec<u32> = (0..10).collect();
//! assert_eq!(chunks(&ids, 4).unwrap().count(), 3);
//! ```
//!
//! # Features
//!
//! - `parallel` (default): rayon-backed [`par_each`] and [`par_chunks`].

// Module declarations
pub mod contracts;
mod error;
pub mod mapping;
mod raise;
pub mod sequence;

// Re-exports for public API
pub use error::{Error, Result};
pub use mapping::{complement, slice, slice_or, slice_strict, union, Mapping, SliceOptions};
pub use raise::{ensure, raise};
pub use sequence::{are_unique, are_unique_by_eq, chunks, duplicates, each, Chunks};

#[cfg(feature = "parallel")]
pub use sequence::{par_chunks, par_each};

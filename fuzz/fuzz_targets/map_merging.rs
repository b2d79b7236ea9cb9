// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for slice/complement/union on arbitrary maps.
//!
//! INVARIANTS checked on every input:
//! 1. slice and complement over the same keys partition the map
//! 2. lenient union lets the second map win
//! 3. strict union fails exactly when the key sets intersect

#![no_main]

use std::collections::HashMap;

use arbitrary::Arbitrary;
use dictkit::{complement, slice_or, union};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    first: HashMap<u8, u16>,
    second: HashMap<u8, u16>,
    keys: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Input { first, second, keys } = input;

    // INVARIANT 1
    let present: Vec<u8> = keys.iter().copied().filter(|k| first.contains_key(k)).collect();
    let kept: HashMap<_, _> = slice_or(&first, present, 0);
    let rest: HashMap<_, _> = complement(&first, keys);
    assert_eq!(kept.len() + rest.len(), first.len());
    assert!(kept.keys().all(|k| !rest.contains_key(k)));

    // INVARIANT 2
    let merged: HashMap<u8, u16> = union(&first, &second, false).expect("lenient union failed");
    for (key, value) in &merged {
        assert_eq!(Some(value), second.get(key).or_else(|| first.get(key)));
    }

    // INVARIANT 3
    let overlap = first.keys().any(|k| second.contains_key(k));
    let strict = union::<_, _, _, _, HashMap<_, _>>(&first, &second, true);
    assert_eq!(strict.is_err(), overlap);
});

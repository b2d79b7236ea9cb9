// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for chunk boundary arithmetic.
//!
//! `Chunks` does its own index math instead of delegating to `slice::chunks`.
//! An off-by-one there either panics on a slice index or silently drops the
//! tail, so compare against the standard library on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (items, size) = input;
    let size = usize::from(size);

    let Ok(iter) = dictkit::chunks(&items, size) else {
        assert_eq!(size, 0, "only a zero size may be rejected");
        return;
    };

    let expected_len = iter.len();
    let ours: Vec<&[u8]> = iter.collect();
    let std: Vec<&[u8]> = items.chunks(size).collect();

    assert_eq!(ours.len(), expected_len, "size_hint disagrees with output");
    assert_eq!(ours, std, "chunk boundaries differ from slice::chunks");
});

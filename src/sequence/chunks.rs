// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size chunking of slices.
//!
//! [`chunks`] validates the size once and hands back a [`Chunks`] iterator
//! that walks the slice by index range. Nothing is copied: each chunk is a
//! borrowed sub-slice, produced only when the iterator is advanced.
//!
//! ```text
//! items:  [0 1 2 3 4 5 6 7 8 9]   size = 4
//!          └──┬──┘ └──┬──┘ └┬┘
//! chunks:  [0..4)  [4..8)  [8..10)
//! ```

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::contracts::check_chunk_len;
use crate::error::{Error, Result};

/// Lazy iterator over consecutive sub-slices of at most `size` elements.
///
/// Every chunk but the last has exactly `size` elements; the last holds the
/// remainder. Once exhausted it stays exhausted.
#[derive(Debug)]
pub struct Chunks<'a, T> {
    items: &'a [T],
    size: usize,
    /// Index of the first element of the next chunk.
    start: usize,
}

// Manual impl: cloning the iterator never clones elements.
impl<T> Clone for Chunks<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            size: self.size,
            start: self.start,
        }
    }
}

impl<'a, T> Chunks<'a, T> {
    /// Chunk length this iterator was built with.
    pub fn chunk_size(&self) -> usize {
        self.size
    }

    /// Elements not yet yielded.
    pub fn remaining(&self) -> &'a [T] {
        &self.items[self.start..]
    }
}

impl<'a, T> Iterator for Chunks<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.items.len() {
            return None;
        }
        // `start + size` can pass usize::MAX for long zero-sized slices.
        let end = self.start + self.size.min(self.items.len() - self.start);
        let chunk = &self.items[self.start..end];
        self.start = end;
        check_chunk_len(chunk.len(), self.size, self.start == self.items.len());
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len() - self.start;
        let n = left.div_ceil(self.size);
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for Chunks<'_, T> {}

impl<T> FusedIterator for Chunks<'_, T> {}

/// Split `items` into chunks of `size` elements, the last one possibly shorter.
///
/// Fails with [`Error::InvalidArgument`] when `size` is zero. An empty slice
/// yields no chunks.
///
/// ```
/// use dictkit::chunks;
///
/// let items: Vec<i32> = (0..10).collect();
/// let split: Vec<&[i32]> = chunks(&items, 4).unwrap().collect();
/// assert_eq!(split, vec![&[0, 1, 2, 3][..], &[4, 5, 6, 7][..], &[8, 9][..]]);
///
/// assert!(chunks(&items, 0).is_err());
/// ```
pub fn chunks<T>(items: &[T], size: usize) -> Result<Chunks<'_, T>> {
    validate_size(size)?;
    trace!(len = items.len(), size, "chunking slice");
    Ok(Chunks {
        items,
        size,
        start: 0,
    })
}

/// Chunk sizes must be positive.
pub(crate) fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        debug!("rejecting chunk size of zero");
        return Err(Error::InvalidArgument {
            name: "size",
            reason: "chunk size must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Parallel chunk iterator over the same boundaries as [`chunks`].
///
/// Chunk order is preserved by `collect`, but the closures run on rayon's
/// thread pool in no particular order.
#[cfg(feature = "parallel")]
pub fn par_chunks<T: Sync>(
    items: &[T],
    size: usize,
) -> Result<rayon::slice::Chunks<'_, T>> {
    use rayon::prelude::*;

    validate_size(size)?;
    Ok(items.par_chunks(size))
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Eager for-each with error propagation.

/// Call `callback` on every element of `items`, in order.
///
/// The first `Err` stops the walk and is returned unchanged; later elements
/// are never visited.
///
/// ```
/// use dictkit::each;
///
/// let mut tripled = Vec::new();
/// each(
///     |x| {
///         tripled.push(x * 3);
///         Ok::<_, ()>(())
///     },
///     0..9,
/// )
/// .unwrap();
/// assert_eq!(tripled, vec![0, 3, 6, 9, 12, 15, 18, 21, 24]);
/// ```
pub fn each<I, F, E>(mut callback: F, items: I) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<(), E>,
{
    for item in items {
        callback(item)?;
    }
    Ok(())
}

/// Call `callback` on every element of `items` using rayon's thread pool.
///
/// Invocation order is unspecified. If several calls fail, one of their
/// errors is returned; remaining work is abandoned as soon as rayon notices.
#[cfg(feature = "parallel")]
pub fn par_each<I, F, E>(callback: F, items: I) -> Result<(), E>
where
    I: rayon::iter::IntoParallelIterator,
    F: Fn(I::Item) -> Result<(), E> + Sync + Send,
    E: Send,
{
    use rayon::prelude::*;

    items.into_par_iter().try_for_each(callback)
}

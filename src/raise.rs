// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failing from expression position.
//!
//! `return Err(e)` is a statement-shaped escape. These helpers turn "fail with
//! this error" into a value, so it can be the result of an `if`, a `match`
//! arm, or a combinator like `map_or_else`, and typecheck against whatever
//! `Ok` type the surrounding expression wants.

/// Always fail with `err`.
///
/// ```
/// use dictkit::raise;
///
/// fn not_thirteen(x: i32) -> Result<bool, String> {
///     if x != 13 { Ok(true) } else { raise("suddenly".to_string()) }
/// }
///
/// assert_eq!(not_thirteen(1), Ok(true));
/// assert_eq!(not_thirteen(13), Err("suddenly".to_string()));
/// ```
pub fn raise<T, E>(err: E) -> Result<T, E> {
    Err(err)
}

/// `Ok(())` if `condition` holds, otherwise fail with the error built by `err`.
///
/// The closure only runs on failure.
///
/// ```
/// use dictkit::ensure;
///
/// let check = |x: i32| ensure(x != 13, || format!("{} is unlucky", x));
/// assert!(check(12).is_ok());
/// assert_eq!(check(13), Err("13 is unlucky".to_string()));
/// ```
pub fn ensure<E>(condition: bool, err: impl FnOnce() -> E) -> Result<(), E> {
    if condition {
        Ok(())
    } else {
        raise(err())
    }
}

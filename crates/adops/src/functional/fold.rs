//! Left folds over sequences of scalars.
//!
//! ## Purpose
//!
//! This module provides the generic left-to-right `reduce` and the two
//! standard numeric folds built from it: `sum` and `prod`.
//!
//! ## Design notes
//!
//! * **Explicit seed policy**: The optional initial value is an explicit
//!   `Option<T>`. With `None`, the first element seeds the fold and folding
//!   starts at the second; an empty sequence is then an error.
//! * **Identity elements**: `sum` seeds with 0 and `prod` starts at 1, so
//!   both are total even on empty input.
//!
//! ## Invariants
//!
//! * Folding is strictly left-to-right: `reduce(f, [a, b, c], None)`
//!   evaluates `f(f(a, b), c)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::{add, mul};
use crate::primitives::errors::OpsError;

// ============================================================================
// Fold Functions
// ============================================================================

/// Fold `xs` left-to-right with the binary function `f`.
///
/// When `initial` is `None`, the first element is used as the seed and
/// folding starts from the second. Returns `OpsError::EmptyReduce` for an
/// empty sequence with no initial value.
pub fn reduce<T, F>(f: F, xs: &[T], initial: Option<T>) -> Result<T, OpsError>
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let mut iter = xs.iter().copied();

    let mut acc = match initial {
        Some(seed) => seed,
        None => iter.next().ok_or(OpsError::EmptyReduce)?,
    };

    for x in iter {
        acc = f(acc, x);
    }

    Ok(acc)
}

/// Sum of a sequence. The empty sum is zero.
#[inline]
pub fn sum<T: Float>(xs: &[T]) -> T {
    // Seeded with the additive identity, the fold cannot fail.
    reduce(add, xs, Some(T::zero())).unwrap_or_else(|_| T::zero())
}

/// Product of a sequence. The empty product is one.
pub fn prod<T: Float>(xs: &[T]) -> T {
    let mut result = T::one();
    for &x in xs {
        result = mul(result, x);
    }
    result
}

//! Element-wise sequence transformation.
//!
//! ## Purpose
//!
//! This module provides the two shape-preserving higher-order utilities:
//! `map` applies a unary function to every element, `zip_with` combines two
//! sequences element-wise with a binary function.
//!
//! ## Design notes
//!
//! * **Non-mutating**: Inputs are borrowed slices; results are fresh vectors.
//! * **Truncating**: `zip_with` pairs up to the shorter input and drops the
//!   excess rather than erroring on a length mismatch.
//! * **Polymorphic output**: The element function may produce a different
//!   type than it consumes, so predicates (`lt`, `eq`) are mappable too.
//!
//! ## Non-goals
//!
//! * This module does not reduce sequences to a single value (see `fold`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Transformation Functions
// ============================================================================

/// Apply `f` to every element of `xs`, producing a new vector of the same
/// length and order.
#[inline]
pub fn map<T, U, F>(f: F, xs: &[T]) -> Vec<U>
where
    T: Copy,
    F: Fn(T) -> U,
{
    xs.iter().map(|&x| f(x)).collect()
}

/// Combine `xs` and `ys` element-wise with `f`.
///
/// Pairing stops at the shorter slice's length; leftover elements of the
/// longer slice are dropped.
#[inline]
pub fn zip_with<T, U, F>(f: F, xs: &[T], ys: &[T]) -> Vec<U>
where
    T: Copy,
    F: Fn(T, T) -> U,
{
    xs.iter().zip(ys.iter()).map(|(&x, &y)| f(x, y)).collect()
}

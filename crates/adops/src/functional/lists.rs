//! Element-wise list operators derived from the scalar operators.
//!
//! Thin compositions of the transform and fold utilities with the elementary
//! scalar operators, plus the list-level distributivity oracle used by
//! property-based tests.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::functional::fold::sum;
use crate::functional::transform::{map, zip_with};
use crate::math::scalar::{add, is_close, neg};

// ============================================================================
// Element-wise Operators
// ============================================================================

/// Element-wise sum of two sequences.
///
/// Inherits `zip_with`'s truncation: the result has the shorter length.
#[inline]
pub fn add_lists<T: Float>(xs: &[T], ys: &[T]) -> Vec<T> {
    zip_with(add, xs, ys)
}

/// Element-wise negation of a sequence.
#[inline]
pub fn neg_list<T: Float>(xs: &[T]) -> Vec<T> {
    map(neg, xs)
}

// ============================================================================
// List-level Identity Check
// ============================================================================

/// Sum distributes over element-wise pairing:
/// `sum(xs) + sum(ys)` is close to `sum(add_lists(xs, ys))`.
///
/// Meaningful only for sequences of equal length; with mismatched lengths
/// the right-hand side truncates and the identity generally fails.
pub fn sum_distribute<T: Float>(xs: &[T], ys: &[T]) -> bool {
    let left = add(sum(xs), sum(ys));
    let right = sum(&add_lists(xs, ys));
    is_close(left, right)
}

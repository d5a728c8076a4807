//! Elementary scalar operators.
//!
//! ## Purpose
//!
//! This module provides the elementary numeric operators that everything else
//! in the crate is built from: arithmetic, comparison, and the activation
//! functions used by neural-network layers (sigmoid, relu).
//!
//! ## Design notes
//!
//! * **Generic**: All operators work over any `num_traits::Float` type.
//! * **Pure**: Every function is stateless and allocation-free.
//! * **Fail fast**: `ln` and `inv` return `Result` and reject inputs outside
//!   their natural domain; no other operator can fail.
//!
//! ## Key concepts
//!
//! * **Stable sigmoid**: The logistic function branches on the sign of its
//!   input so the exponential never overflows.
//! * **Tie-breaking max**: `max(a, b)` returns `b` unless `a` is strictly
//!   greater. Downstream property checks depend on this exact behavior.
//!
//! ## Invariants
//!
//! * `sigmoid` maps every finite input into [0, 1].
//! * `relu` is defined through `max`, so the two agree at zero.
//!
//! ## Non-goals
//!
//! * This module does not implement derivative rules (see `math::backward`).
//! * This module does not operate on sequences (see the functional layer).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OpsError;

// ============================================================================
// Constants
// ============================================================================

/// Default absolute tolerance for [`is_close`] comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-2;

// ============================================================================
// Arithmetic Operators
// ============================================================================

/// Multiply two scalars.
#[inline]
pub fn mul<T: Float>(a: T, b: T) -> T {
    a * b
}

/// Add two scalars.
#[inline]
pub fn add<T: Float>(a: T, b: T) -> T {
    a + b
}

/// Additive inverse.
#[inline]
pub fn neg<T: Float>(a: T) -> T {
    -a
}

/// Identity: returns the input unchanged.
#[inline]
pub fn id<T: Float>(a: T) -> T {
    a
}

// ============================================================================
// Comparison Operators
// ============================================================================

/// Strict ordering test: `a < b`.
#[inline]
pub fn lt<T: Float>(a: T, b: T) -> bool {
    a < b
}

/// Value equality test.
#[inline]
pub fn eq<T: Float>(a: T, b: T) -> bool {
    a == b
}

/// Binary maximum.
///
/// Returns `b` unless `a` is strictly greater, so `b` wins ties.
#[inline]
pub fn max<T: Float>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Approximate equality within [`DEFAULT_TOLERANCE`].
#[inline]
pub fn is_close<T: Float>(a: T, b: T) -> bool {
    is_close_within(a, b, T::from(DEFAULT_TOLERANCE).unwrap())
}

/// Approximate equality within an explicit absolute tolerance.
#[inline]
pub fn is_close_within<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() < tolerance
}

// ============================================================================
// Activation Functions
// ============================================================================

/// Numerically-stable logistic function.
///
/// Branches on the sign of the input: for `a >= 0` computes
/// `1 / (1 + e^-a)`, otherwise `e^a / (1 + e^a)`. The exponential argument
/// is never positive, so the computation cannot overflow for very negative
/// inputs.
pub fn sigmoid<T: Float>(a: T) -> T {
    if a >= T::zero() {
        T::one() / (T::one() + (-a).exp())
    } else {
        let exp_a = a.exp();
        exp_a / (T::one() + exp_a)
    }
}

/// Rectified linear unit: `max(a, 0)`.
#[inline]
pub fn relu<T: Float>(a: T) -> T {
    max(a, T::zero())
}

// ============================================================================
// Transcendental Operators
// ============================================================================

/// Natural logarithm.
///
/// Returns `OpsError::LogDomain` when the input is not strictly positive.
pub fn ln<T: Float>(a: T) -> Result<T, OpsError> {
    if a <= T::zero() {
        return Err(OpsError::LogDomain(a.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(a.ln())
}

/// Natural exponential: `e^a`.
#[inline]
pub fn exp<T: Float>(a: T) -> T {
    a.exp()
}

/// Reciprocal: `1 / a`.
///
/// Returns `OpsError::DivisionByZero` when the input is zero.
pub fn inv<T: Float>(a: T) -> Result<T, OpsError> {
    if a == T::zero() {
        return Err(OpsError::DivisionByZero);
    }
    Ok(T::one() / a)
}

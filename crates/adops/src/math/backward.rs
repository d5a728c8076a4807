//! Derivative-propagation helpers for reverse-mode differentiation.
//!
//! ## Purpose
//!
//! This module provides the "backward" counterpart of each nonlinear forward
//! operator. Each helper takes the original input `a` and an upstream
//! gradient `d` and returns the local chain-rule term `d * f'(a)` for an
//! external tape or graph builder to accumulate.
//!
//! ## Design notes
//!
//! * **Built on the forward ops**: Division is routed through `inv` so a
//!   zero denominator surfaces as the same `DivisionByZero` error, and
//!   `sigmoid_back` reuses the stable `sigmoid` branches rather than a naive
//!   formula that diverges at extreme inputs.
//! * **Raw formulas**: `ln_back` computes `d * (1/a)` as written; it only
//!   fails at `a == 0` and accepts negative input.
//!
//! ## Invariants
//!
//! * The sub-gradient of relu at the kink (`a == 0`) is zero.
//! * `sigmoid_back` is finite for every finite input.
//!
//! ## Non-goals
//!
//! * This module does not accumulate gradients across operations.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::{inv, mul, neg, sigmoid};
use crate::primitives::errors::OpsError;

// ============================================================================
// Backward Operators
// ============================================================================

/// Chain-rule term for the natural logarithm: `d * (1/a)`.
#[inline]
pub fn ln_back<T: Float>(a: T, d: T) -> Result<T, OpsError> {
    Ok(mul(d, inv(a)?))
}

/// Chain-rule term for the reciprocal: `d * (-1/a^2)`.
#[inline]
pub fn inv_back<T: Float>(a: T, d: T) -> Result<T, OpsError> {
    Ok(mul(d, neg(inv(mul(a, a))?)))
}

/// Chain-rule term for relu: `d` where the input was positive, zero
/// elsewhere (including the kink at `a == 0`).
#[inline]
pub fn relu_back<T: Float>(a: T, d: T) -> T {
    if a > T::zero() {
        d
    } else {
        T::zero()
    }
}

/// Chain-rule term for the logistic function: `d * s * (1 - s)` with
/// `s = sigmoid(a)`.
#[inline]
pub fn sigmoid_back<T: Float>(a: T, d: T) -> T {
    let s = sigmoid(a);
    mul(d, mul(s, T::one() - s))
}

#![cfg(feature = "dev")]
//! Tests for the algebraic identity checks.
//!
//! These tests exercise the property oracles over representative inputs,
//! including cases where the premise fails and the oracle must still return
//! true.
//!
//! ## Test Organization
//!
//! 1. **Ordering** - Transitivity of strict less-than
//! 2. **Equality** - Symmetry, including NaN
//! 3. **Arithmetic Laws** - Distributivity and commutativity

use adops::internals::math::properties::{
    commutative_add, mul_distributes_over_add, symmetric_eq, transitive_lt,
};

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test transitivity holds for ordered triples.
#[test]
fn test_transitive_lt_ordered() {
    assert!(transitive_lt(1.0, 2.0, 3.0));
    assert!(transitive_lt(-5.0, 0.0, 0.1));
}

/// Test the oracle is vacuously true when the premise fails.
#[test]
fn test_transitive_lt_vacuous() {
    // a < b fails
    assert!(transitive_lt(3.0, 2.0, 4.0));
    // b < c fails
    assert!(transitive_lt(1.0, 5.0, 4.0));
    // both fail
    assert!(transitive_lt(5.0, 4.0, 3.0));
}

/// Test transitivity with NaN operands, where every comparison is false.
#[test]
fn test_transitive_lt_nan() {
    assert!(transitive_lt(f64::NAN, 1.0, 2.0));
    assert!(transitive_lt(1.0, f64::NAN, 2.0));
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Test equality is symmetric for ordinary and exceptional values.
#[test]
fn test_symmetric_eq() {
    assert!(symmetric_eq(1.0, 1.0));
    assert!(symmetric_eq(1.0, 2.0));
    assert!(symmetric_eq(f64::NAN, f64::NAN));
    assert!(symmetric_eq(f64::INFINITY, f64::NEG_INFINITY));
}

// ============================================================================
// Arithmetic Law Tests
// ============================================================================

/// Test distributivity of multiplication over addition.
#[test]
fn test_mul_distributes_over_add() {
    assert!(mul_distributes_over_add(2.0, 3.0, 4.0));
    assert!(mul_distributes_over_add(-1.5, 0.25, 7.0));
    assert!(mul_distributes_over_add(0.0, 123.0, -456.0));
}

/// Test commutativity of addition.
#[test]
fn test_commutative_add() {
    assert!(commutative_add(1.0, 2.0));
    assert!(commutative_add(-3.25, 3.25));
    assert!(commutative_add(1e-8, 1e8));
}

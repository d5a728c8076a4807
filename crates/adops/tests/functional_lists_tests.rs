#![cfg(feature = "dev")]
//! Tests for the element-wise list operators.
//!
//! These tests verify add_lists, neg_list, and the list-level
//! distributivity oracle.
//!
//! ## Test Organization
//!
//! 1. **Element-wise Operators** - add_lists, neg_list, truncation
//! 2. **Sum-Distribute Oracle** - Equal-length identity

use adops::internals::functional::lists::{add_lists, neg_list, sum_distribute};

// ============================================================================
// Element-wise Operator Tests
// ============================================================================

/// Test element-wise addition of two sequences.
#[test]
fn test_add_lists() {
    let xs = vec![1.0, 2.0, 3.0];
    let ys = vec![4.0, 5.0, 6.0];
    assert_eq!(add_lists(&xs, &ys), vec![5.0, 7.0, 9.0]);
}

/// Test add_lists inherits zip_with's truncation.
#[test]
fn test_add_lists_truncation() {
    let xs = vec![1.0, 2.0, 3.0];
    let ys = vec![10.0];
    assert_eq!(add_lists(&xs, &ys), vec![11.0]);
}

/// Test element-wise negation.
#[test]
fn test_neg_list() {
    let xs = vec![1.0, -2.0, 0.0, 3.5];
    assert_eq!(neg_list(&xs), vec![-1.0, 2.0, 0.0, -3.5]);

    let empty: Vec<f64> = vec![];
    assert!(neg_list(&empty).is_empty());
}

// ============================================================================
// Sum-Distribute Oracle Tests
// ============================================================================

/// Test the distributivity of sum over element-wise pairing.
///
/// sum([1,2,3]) + sum([4,5,6]) = 21 = sum([5,7,9]).
#[test]
fn test_sum_distribute() {
    let xs = vec![1.0, 2.0, 3.0];
    let ys = vec![4.0, 5.0, 6.0];
    assert!(sum_distribute(&xs, &ys));
}

/// Test the oracle on empty and negative-valued inputs.
#[test]
fn test_sum_distribute_edge_values() {
    let empty: Vec<f64> = vec![];
    assert!(sum_distribute(&empty, &empty));

    let xs = vec![-1.0, -2.0];
    let ys = vec![1.0, 2.0];
    assert!(sum_distribute(&xs, &ys));
}

/// Test the identity generally fails for mismatched lengths, where the
/// right-hand side truncates.
#[test]
fn test_sum_distribute_mismatched_lengths() {
    let xs = vec![1.0, 2.0, 3.0];
    let ys = vec![1.0];
    assert!(!sum_distribute(&xs, &ys));
}

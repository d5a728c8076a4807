//! Error types for scalar operator evaluation.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while evaluating
//! the scalar operators and list utilities: logarithm domain violations,
//! division by zero, and seedless reduction of an empty sequence.
//!
//! ## Design notes
//!
//! * **Contextual**: Domain errors carry the offending input value.
//! * **No-std**: The type depends only on `core`; `std::error::Error` is
//!   implemented when the `std` feature is enabled.
//! * **Fail fast**: Errors are returned immediately and never caught or
//!   recovered internally.
//!
//! ## Key concepts
//!
//! 1. **Domain error**: `ln` rejects non-positive input.
//! 2. **Division error**: `inv` and the backward helpers that divide reject
//!    a zero denominator.
//! 3. **Empty-input error**: `reduce` without an initial value rejects an
//!    empty sequence.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the domain checks itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for scalar operator evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpsError {
    /// The natural logarithm is undefined for non-positive input.
    ///
    /// Carries the offending input, lowered to `f64` for reporting.
    LogDomain(f64),

    /// A reciprocal or division-style operator received a zero denominator.
    DivisionByZero,

    /// `reduce` was given an empty sequence and no initial value to seed
    /// the fold with.
    EmptyReduce,
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for OpsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LogDomain(a) => {
                write!(f, "Logarithm domain error: ln({a}) requires input > 0")
            }
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::EmptyReduce => {
                write!(f, "Cannot reduce an empty sequence without an initial value")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for OpsError {}

//! # adops — Scalar operators for reverse-mode automatic differentiation
//!
//! `adops` provides the foundational building blocks of a minimal
//! reverse-mode automatic-differentiation framework: elementary scalar
//! operators, their derivative-propagation ("backward") helpers, and generic
//! higher-order list utilities built atop them.
//!
//! The crate deliberately stops below the tape: it implements no tensors,
//! no computation graph, and no gradient bookkeeping. A graph or tape layer
//! consumes these operators pairwise (forward op + matching backward op) and
//! uses the list utilities wherever batched scalar application is needed.
//!
//! ## Quick Start
//!
//! ### Forward and backward operators
//!
//! ```rust
//! use adops::prelude::*;
//!
//! // Forward pass
//! assert!(is_close(sigmoid(0.0_f64), 0.5));
//! assert_eq!(relu(-3.0_f64), 0.0);
//!
//! // Backward pass: d/da ln(a) = 1/a, scaled by the upstream gradient
//! let grad = ln_back(2.0_f64, 1.0)?;
//! assert!(is_close(grad, 0.5));
//! # Result::<(), OpsError>::Ok(())
//! ```
//!
//! ### List utilities
//!
//! ```rust
//! use adops::prelude::*;
//!
//! let xs = vec![1.0, 2.0, 3.0];
//! let ys = vec![4.0, 5.0, 6.0];
//!
//! assert_eq!(add_lists(&xs, &ys), vec![5.0, 7.0, 9.0]);
//! assert_eq!(neg_list(&xs), vec![-1.0, -2.0, -3.0]);
//! assert_eq!(sum(&xs), 6.0);
//! assert_eq!(prod(&ys), 120.0);
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operators return `Result<T, OpsError>` and never panic. Domain
//! violations surface immediately to the caller; there is no retry or
//! fallback.
//!
//! ```rust
//! use adops::prelude::*;
//!
//! assert!(matches!(ln(-1.0_f64), Err(OpsError::LogDomain(_))));
//! assert_eq!(inv(0.0_f64), Err(OpsError::DivisionByZero));
//!
//! // The `?` operator is idiomatic:
//! let x = inv(4.0_f64)?;
//! assert!(is_close(x, 0.25));
//! # Result::<(), OpsError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency; `alloc` is still required for the
//! list utilities:
//!
//! ```toml
//! [dependencies]
//! adops = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error types.
mod primitives;

// Layer 2: Math - pure scalar operators, backward helpers, property checks.
mod math;

// Layer 3: Functional - generic higher-order list utilities.
mod functional;

// Standard operator prelude.
pub mod prelude {
    pub use crate::functional::fold::{prod, reduce, sum};
    pub use crate::functional::lists::{add_lists, neg_list, sum_distribute};
    pub use crate::functional::transform::{map, zip_with};
    pub use crate::math::backward::{inv_back, ln_back, relu_back, sigmoid_back};
    pub use crate::math::properties::{
        commutative_add, mul_distributes_over_add, symmetric_eq, transitive_lt,
    };
    pub use crate::math::scalar::{
        add, eq, exp, id, inv, is_close, is_close_within, ln, lt, max, mul, neg, relu, sigmoid,
        DEFAULT_TOLERANCE,
    };
    pub use crate::primitives::errors::OpsError;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod functional {
        pub use crate::functional::*;
    }
}

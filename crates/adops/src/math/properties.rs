//! Self-verifying algebraic identities over the scalar operators.
//!
//! These boolean-returning checks encode mathematical laws the operators
//! must satisfy. They are intended as oracles for property-based tests, not
//! as production logic: each returns `true` when the law holds (or when its
//! premise does not apply).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scalar::{add, eq, is_close, lt, mul};

// Transitivity of strict ordering: a < b and b < c imply a < c.
#[inline]
pub fn transitive_lt<T: Float>(a: T, b: T, c: T) -> bool {
    !(lt(a, b) && lt(b, c)) || lt(a, c)
}

// Symmetry of equality: eq(a, b) agrees with eq(b, a).
#[inline]
pub fn symmetric_eq<T: Float>(a: T, b: T) -> bool {
    eq(a, b) == eq(b, a)
}

// Distributivity: a * (b + c) is close to a*b + a*c.
#[inline]
pub fn mul_distributes_over_add<T: Float>(a: T, b: T, c: T) -> bool {
    is_close(mul(a, add(b, c)), add(mul(a, b), mul(a, c)))
}

// Commutativity of addition: a + b is close to b + a.
#[inline]
pub fn commutative_add<T: Float>(a: T, b: T) -> bool {
    is_close(add(a, b), add(b, a))
}

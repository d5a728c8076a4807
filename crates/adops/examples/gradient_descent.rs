//! adops Operator Examples
//!
//! This example demonstrates the operator library end to end:
//! - Elementary forward operators
//! - Backward (derivative-propagation) helpers
//! - Generic list utilities
//! - A tiny 1-D gradient-descent loop driven by the backward helpers

use adops::prelude::*;

fn main() -> Result<(), OpsError> {
    println!("{}", "=".repeat(80));
    println!("adops Operator Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_forward_operators()?;
    example_2_backward_operators()?;
    example_3_list_utilities()?;
    example_4_gradient_descent()?;

    Ok(())
}

/// Example 1: Forward Operators
/// Demonstrates the elementary scalar operators
fn example_1_forward_operators() -> Result<(), OpsError> {
    println!("Example 1: Forward Operators");
    println!("{}", "-".repeat(80));

    println!("mul(3, 4)      = {}", mul(3.0, 4.0));
    println!("add(3, 4)      = {}", add(3.0, 4.0));
    println!("max(2, 7)      = {}", max(2.0, 7.0));
    println!("relu(-1.5)     = {}", relu(-1.5));
    println!("sigmoid(0)     = {}", sigmoid(0.0));
    println!("sigmoid(-1000) = {}", sigmoid(-1000.0)); // stable, no overflow
    println!("ln(e)          = {}", ln(std::f64::consts::E)?);
    println!("inv(4)         = {}", inv(4.0)?);

    println!();
    Ok(())
}

/// Example 2: Backward Operators
/// Demonstrates the chain-rule terms with an upstream gradient of 1
fn example_2_backward_operators() -> Result<(), OpsError> {
    println!("Example 2: Backward Operators");
    println!("{}", "-".repeat(80));

    let a = 2.0;
    println!("d/da ln(a)      at a = {a}: {}", ln_back(a, 1.0)?);
    println!("d/da (1/a)      at a = {a}: {}", inv_back(a, 1.0)?);
    println!("d/da relu(a)    at a = {a}: {}", relu_back(a, 1.0));
    println!("d/da sigmoid(a) at a = {a}: {}", sigmoid_back(a, 1.0));

    // Domain violations surface as errors, never panics
    match ln_back(0.0, 1.0) {
        Err(e) => println!("ln_back(0, 1) fails fast: {e}"),
        Ok(_) => unreachable!(),
    }

    println!();
    Ok(())
}

/// Example 3: List Utilities
/// Demonstrates map, zip_with, reduce, and the derived list operators
fn example_3_list_utilities() -> Result<(), OpsError> {
    println!("Example 3: List Utilities");
    println!("{}", "-".repeat(80));

    let xs = vec![1.0, 2.0, 3.0, 4.0];
    let ys = vec![10.0, 20.0, 30.0, 40.0];

    println!("xs                 = {xs:?}");
    println!("map(neg, xs)       = {:?}", neg_list(&xs));
    println!("zip_with(add, ..)  = {:?}", add_lists(&xs, &ys));
    println!("map(sigmoid, xs)   = {:?}", map(sigmoid, &xs));
    println!("reduce(mul, xs)    = {:?}", reduce(mul, &xs, None)?);
    println!("sum(xs)            = {}", sum(&xs));
    println!("prod(xs)           = {}", prod(&xs));
    println!("sum_distribute     = {}", sum_distribute(&xs, &ys));

    println!();
    Ok(())
}

/// Example 4: Gradient Descent
/// Minimizes f(x) = ln(x) + 1/x using the backward helpers.
/// f'(x) = 1/x - 1/x^2, so the minimum sits at x = 1.
fn example_4_gradient_descent() -> Result<(), OpsError> {
    println!("Example 4: Gradient Descent on f(x) = ln(x) + 1/x");
    println!("{}", "-".repeat(80));

    let learning_rate = 0.5;
    let mut x = 4.0;

    for step in 0..40 {
        // Upstream gradient is 1 at the loss; each term contributes its
        // chain-rule piece.
        let grad = add(ln_back(x, 1.0)?, inv_back(x, 1.0)?);
        x = add(x, neg(mul(learning_rate, grad)));

        if step % 8 == 0 {
            let f = add(ln(x)?, inv(x)?);
            println!("step {step:>2}: x = {x:.6}, f(x) = {f:.6}");
        }
    }

    println!("converged near x = {x:.6} (expected 1.0)");
    assert!(is_close_within(x, 1.0, 1e-3));

    println!();
    Ok(())
}

//! Shared test utilities for integration tests.
//!
//! These helpers construct expression trees and evaluate sources. They mirror
//! a subset of the `foldcalc::test_util` module without requiring the
//! `test-support` feature, enabling integration tests to compile against the
//! published library.

#![expect(
    dead_code,
    reason = "helpers are reused across multiple tests so some may be unused"
)]

use foldcalc::{Expr, Operator, calculate};

/// Construct an [`Expr::Literal`].
#[must_use]
pub fn lit(value: f64) -> Expr {
    Expr::literal(value)
}

/// Construct a composite closed with the trailing `0` and `+` pair.
#[must_use]
pub fn span(mut elements: Vec<Expr>, mut operators: Vec<Operator>) -> Expr {
    elements.push(Expr::literal(0.0));
    operators.push(Operator::Add);
    Expr::composite(elements, operators)
}

/// Parse and evaluate `src`, panicking on failure.
#[track_caller]
#[must_use]
pub fn value_of(src: &str) -> f64 {
    calculate(src).unwrap_or_else(|e| panic!("failed to calculate {src:?}: {e}"))
}

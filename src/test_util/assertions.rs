//! Assertion helpers for verifying parser and evaluator results in tests.

use crate::parser::ast::Expr;
use crate::{ParseError, evaluate, parse};

/// Parse `src`, panicking with the error if parsing fails.
///
/// # Panics
/// Panics if `src` does not parse.
#[track_caller]
#[must_use]
pub fn parse_ok(src: &str) -> Expr {
    parse(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"))
}

/// Assert that `src` parses and evaluates to exactly `expected`.
///
/// # Panics
/// Panics if parsing or evaluation fails, or the value differs.
#[track_caller]
pub fn assert_evaluates_to(src: &str, expected: f64) {
    let expr = parse_ok(src);
    let value = evaluate(&expr).unwrap_or_else(|e| panic!("failed to evaluate {src:?}: {e}"));
    assert_eq!(value, expected, "unexpected value for {src:?}");
}

/// Assert that parsing `src` fails with exactly `expected`.
///
/// # Panics
/// Panics if `src` parses, or fails with a different error.
#[track_caller]
pub fn assert_parse_error(src: &str, expected: &ParseError) {
    let result = parse(src);
    assert!(result.is_err(), "expected {src:?} to fail, got {result:?}");
    assert_eq!(result.err().as_ref(), Some(expected), "unexpected error for {src:?}");
}

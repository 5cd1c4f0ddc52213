//! Helpers for constructing expression nodes and asserting parser results in
//! tests.
//!
//! These functions reduce boilerplate when asserting over [`Expr`] trees and
//! when checking that parsing or evaluation fails with the expected error.

mod assertions;
mod expressions;

pub use assertions::{assert_evaluates_to, assert_parse_error, parse_ok};
pub use expressions::{div, lit, mul, span};

//! Helpers for constructing expression nodes in tests.

use crate::parser::ast::{Expr, Operator};

/// Construct an [`Expr::Literal`].
#[must_use]
pub fn lit(value: f64) -> Expr {
    Expr::literal(value)
}

/// Construct a multiplication [`Expr::Binary`].
#[must_use]
pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(lhs, rhs, Operator::Multiply)
}

/// Construct a division [`Expr::Binary`].
#[must_use]
pub fn div(lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(lhs, rhs, Operator::Divide)
}

/// Construct an [`Expr::Composite`] the way the parser closes a span.
///
/// The trailing `0` element and `+` operator are appended, so callers list
/// only the elements and operators written in the source.
///
/// # Examples
///
/// ```rust,no_run
/// # #[cfg(feature = "test-support")]
/// # {
/// use foldcalc::Operator;
/// use foldcalc::test_util::{lit, span};
///
/// let expr = span(vec![lit(1.0), lit(2.0)], vec![Operator::Add]);
/// assert_eq!(expr.render(), "([1.0][2.0][0.0] ++)");
/// # }
/// ```
#[must_use]
pub fn span(mut elements: Vec<Expr>, mut operators: Vec<Operator>) -> Expr {
    elements.push(Expr::literal(0.0));
    operators.push(Operator::Add);
    Expr::composite(elements, operators)
}

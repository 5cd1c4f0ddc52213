//! Top-level error for one-shot calculation.

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::parser::ParseError;

/// Errors returned by [`calculate`](crate::calculate) and
/// [`calculate_with`](crate::calculate_with).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

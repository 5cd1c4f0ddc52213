//! Library crate for foldcalc.
//!
//! Parses flat arithmetic expressions (decimal numbers, `+ - * /` and
//! parentheses) into a tree and folds that tree into an `f64`.
//!
//! ```rust
//! use foldcalc::calculate;
//!
//! assert_eq!(calculate("(2+3)*4"), Ok(20.0));
//! assert_eq!(calculate("10/2/5"), Ok(1.0));
//! assert!(calculate("*5").is_err());
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod evaluator;
pub mod language;
pub mod parser;
pub mod tokenizer;

// Only expose test utilities to tests and opt-in consumers.
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_util;

pub use config::{Config, DivisionPolicy};
pub use error::Error;
pub use evaluator::{EvalError, evaluate, evaluate_with};
pub use language::SyntaxKind;
pub use parser::ast::{Expr, Operator, UnknownOperator};
pub use parser::{ParseError, parse, parse_with};
pub use tokenizer::{Span, tokenize};

/// Render `expr` in bracketed diagnostic form.
///
/// See [`Expr::render`].
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.render()
}

/// Parse and evaluate `src` using the default [`Config`].
///
/// # Errors
/// Returns [`Error::Parse`] when the input is rejected and [`Error::Eval`]
/// when the tree cannot be folded.
pub fn calculate(src: &str) -> Result<f64, Error> {
    calculate_with(src, &Config::default())
}

/// Parse and evaluate `src` using `config` for both stages.
///
/// # Errors
/// Returns [`Error::Parse`] when the input is rejected and [`Error::Eval`]
/// when the tree cannot be folded or a zero divisor is rejected.
pub fn calculate_with(src: &str, config: &Config) -> Result<f64, Error> {
    let expr = parse_with(src, config)?;
    Ok(evaluate_with(&expr, config)?)
}

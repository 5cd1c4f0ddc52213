//! Recursive descent construction of expression trees.
//!
//! This module contains the entry points for turning expression text into an
//! [`Expr`]. The input is tokenised once; each parenthesised group is then
//! scanned recursively over its own slice of tokens. Precedence is resolved
//! structurally while inserting operands, so the tree handed to the evaluator
//! only needs a left-to-right fold of additive operators.

use log::debug;

use crate::config::Config;
use crate::tokenize;

pub mod ast;
mod composite;
mod delimiter;
mod errors;
mod scanner;
mod token_stream;

pub use ast::Expr;
pub use errors::ParseError;

use scanner::Scanner;
use token_stream::TokenStream;

/// Parse `src` into an expression tree using the default [`Config`].
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found in the input.
///
/// # Examples
///
/// ```rust
/// use foldcalc::{evaluate, parse};
///
/// let expr = parse("(2+3)*4").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), 20.0);
/// ```
pub fn parse(src: &str) -> Result<Expr, ParseError> {
    parse_with(src, &Config::default())
}

/// Parse `src` into an expression tree using `config`.
///
/// # Errors
/// Returns a [`ParseError`] describing the first problem found in the input,
/// including [`ParseError::NestingTooDeep`] when parentheses nest deeper than
/// [`Config::max_depth`].
pub fn parse_with(src: &str, config: &Config) -> Result<Expr, ParseError> {
    let tokens = tokenize(src);
    let stream = TokenStream::new(&tokens, src, 0..src.len());
    let expr = Scanner::new(config).scan(stream, 0)?;
    debug!("parsed {src:?} as {expr}");
    Ok(expr)
}

#[cfg(test)]
mod tests;

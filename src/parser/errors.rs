//! Error types produced while constructing expression trees.
//!
//! Positions are byte offsets relative to the (sub)expression being scanned,
//! which is carried alongside so nested failures can be located.

use thiserror::Error;

use super::ast::UnknownOperator;

/// Errors returned by [`parse`](crate::parse) and
/// [`parse_with`](crate::parse_with).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The expression starts with `*` or `/`.
    #[error("operator '{operator}' cannot start the expression {expression}")]
    InvalidLeadingOperator { operator: char, expression: String },
    /// A `(` is immediately followed by its matching `)`.
    #[error("empty parentheses at position {index} of the expression {expression}")]
    EmptyParentheses { index: usize, expression: String },
    /// A `(` is never closed, or a `)` has no opening partner.
    #[error("unmatched parenthesis at position {index} of the expression {expression}")]
    UnmatchedParentheses { index: usize, expression: String },
    /// A character outside the accepted alphabet.
    #[error("character '{character}' at position {index} of the expression {expression} could not be processed")]
    UnrecognizedCharacter {
        character: char,
        index: usize,
        expression: String,
    },
    /// An operator token without a registry entry.
    #[error(transparent)]
    UnknownOperator(#[from] UnknownOperator),
    /// A digit run that is not a valid decimal number, such as `1.2.3`.
    #[error("invalid number '{literal}' at position {index} of the expression {expression}")]
    InvalidNumber {
        literal: String,
        index: usize,
        expression: String,
    },
    /// An operator follows another operator or ends the expression.
    #[error("operator at position {index} of the expression {expression} has no right-hand operand")]
    MissingOperand { index: usize, expression: String },
    /// Two operands are adjacent with no operator between them.
    #[error("missing operator before position {index} of the expression {expression}")]
    MissingOperator { index: usize, expression: String },
    /// Parentheses nest deeper than the configured limit.
    #[error("parentheses nest deeper than the limit of {limit}")]
    NestingTooDeep { limit: usize },
}

//! Operator registry for arithmetic expressions.
//!
//! The four supported binary operators are bound to a single input character
//! through a static `phf` map, so lookups need no lifecycle management and
//! the table is shared read-only by every parse.

use phf::phf_map;
use thiserror::Error;

/// Binary operators supported in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Error returned when a character does not name a supported operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("character '{0}' does not name a supported operator")]
pub struct UnknownOperator(pub char);

static OPERATORS: phf::Map<char, Operator> = phf_map! {
    '+' => Operator::Add,
    '-' => Operator::Subtract,
    '*' => Operator::Multiply,
    '/' => Operator::Divide,
};

impl Operator {
    /// Look up the operator bound to `symbol`.
    ///
    /// # Errors
    /// Returns [`UnknownOperator`] for any character other than `+ - * /`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldcalc::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Ok(Operator::Multiply));
    /// assert!(Operator::from_symbol('%').is_err());
    /// ```
    pub fn from_symbol(symbol: char) -> Result<Self, UnknownOperator> {
        OPERATORS
            .get(&symbol)
            .copied()
            .ok_or(UnknownOperator(symbol))
    }

    /// The character this operator is written with.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Whether the operator is folded eagerly at parse time.
    #[must_use]
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Apply the operator to two operands.
    ///
    /// Division follows IEEE-754: a zero divisor yields an infinity or `NaN`
    /// rather than an error.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "operators compute on f64 operands")]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = UnknownOperator;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

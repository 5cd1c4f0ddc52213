//! Parsing and evaluation settings.
//!
//! [`Config`] is a small value type threaded through
//! [`parse_with`](crate::parse_with) and
//! [`evaluate_with`](crate::evaluate_with). The defaults reproduce the plain
//! [`parse`](crate::parse) and [`evaluate`](crate::evaluate) behaviour.

/// Default cap on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// How evaluation treats a divisor of exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionPolicy {
    /// Follow IEEE-754 and produce an infinity or `NaN`.
    #[default]
    Ieee,
    /// Fail with [`EvalError::DivisionByZero`](crate::EvalError::DivisionByZero).
    Reject,
}

/// Settings shared by the parser and the evaluator.
///
/// # Examples
///
/// ```rust
/// use foldcalc::{Config, DivisionPolicy};
///
/// let config = Config::default()
///     .with_max_depth(8)
///     .with_division_policy(DivisionPolicy::Reject);
/// assert_eq!(config.max_depth(), 8);
/// assert_eq!(config.division_policy(), DivisionPolicy::Reject);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_depth: usize,
    division_policy: DivisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            division_policy: DivisionPolicy::default(),
        }
    }
}

impl Config {
    /// Set the deepest parenthesis nesting the parser accepts.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_division_policy(mut self, division_policy: DivisionPolicy) -> Self {
        self.division_policy = division_policy;
        self
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn division_policy(&self) -> DivisionPolicy {
        self.division_policy
    }
}

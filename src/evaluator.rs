//! Evaluation of expression trees.
//!
//! A chain of `Binary` nodes is walked along its left spine in a loop, so a
//! long run of `*` or `/` does not grow the call stack; only the right
//! operands and composite elements recurse, and those nest no deeper than the
//! parentheses that produced them. A `Composite` is folded over a
//! working deque seeded with its elements: each operator pops the first two
//! entries and pushes their result back to the front, so a well-formed
//! composite ends with exactly one entry. The tree itself is never modified,
//! which keeps repeated evaluation of the same tree stable.

use std::collections::VecDeque;

use log::{trace, warn};
use thiserror::Error;

use crate::config::{Config, DivisionPolicy};
use crate::parser::ast::{Expr, Operator};

/// Errors returned by [`evaluate`] and [`evaluate_with`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A composite whose element and operator counts cannot be folded to a
    /// single value. Parsed trees never trigger this.
    #[error(
        "malformed composite with {elements} elements and {operators} operators, please review the operation layout"
    )]
    MalformedComposite { elements: usize, operators: usize },
    /// A divisor of exactly zero under [`DivisionPolicy::Reject`].
    #[error("division by zero")]
    DivisionByZero,
}

/// Entry of the working deque used while folding a composite.
#[derive(Debug, Clone, Copy)]
enum Term<'a> {
    Node(&'a Expr),
    Value(f64),
}

/// Evaluate `expr` using the default [`Config`].
///
/// # Errors
/// Returns [`EvalError::MalformedComposite`] for hand-built trees that do not
/// fold to a single value.
///
/// # Examples
///
/// ```rust
/// use foldcalc::{evaluate, parse};
///
/// let expr = parse("2-3*4").unwrap();
/// assert_eq!(evaluate(&expr).unwrap(), -10.0);
/// ```
pub fn evaluate(expr: &Expr) -> Result<f64, EvalError> {
    evaluate_with(expr, &Config::default())
}

/// Evaluate `expr` using `config`.
///
/// # Errors
/// Returns [`EvalError::MalformedComposite`] for trees that do not fold to a
/// single value, and [`EvalError::DivisionByZero`] when the configured
/// [`DivisionPolicy`] rejects a zero divisor.
pub fn evaluate_with(expr: &Expr, config: &Config) -> Result<f64, EvalError> {
    Evaluator { config }.eval(expr)
}

struct Evaluator<'c> {
    config: &'c Config,
}

impl Evaluator<'_> {
    fn eval(&self, expr: &Expr) -> Result<f64, EvalError> {
        match expr {
            Expr::Literal(value) => Ok(*value),
            Expr::Binary { .. } => self.eval_chain(expr),
            Expr::Composite {
                elements,
                operators,
            } => self.fold(elements, operators),
        }
    }

    fn eval_chain(&self, expr: &Expr) -> Result<f64, EvalError> {
        let mut pending = Vec::new();
        let mut base = expr;
        while let Expr::Binary { op, lhs, rhs } = base {
            pending.push((*op, &**rhs));
            base = &**lhs;
        }
        let mut acc = self.eval(base)?;
        for (op, rhs) in pending.into_iter().rev() {
            let rhs = self.eval(rhs)?;
            acc = self.apply(op, acc, rhs)?;
        }
        Ok(acc)
    }

    fn fold(&self, elements: &[Expr], operators: &[Operator]) -> Result<f64, EvalError> {
        let malformed = || {
            warn!(
                "cannot fold composite with {} elements and {} operators",
                elements.len(),
                operators.len()
            );
            EvalError::MalformedComposite {
                elements: elements.len(),
                operators: operators.len(),
            }
        };
        let mut work: VecDeque<Term<'_>> = elements.iter().map(Term::Node).collect();
        for &op in operators {
            let (Some(first), Some(second)) = (work.pop_front(), work.pop_front()) else {
                return Err(malformed());
            };
            let lhs = self.term(first)?;
            let rhs = self.term(second)?;
            let value = self.apply(op, lhs, rhs)?;
            trace!("folded {lhs:?} {op} {rhs:?} = {value:?}");
            work.push_front(Term::Value(value));
        }
        match (work.pop_front(), work.is_empty()) {
            (Some(last), true) => self.term(last),
            _ => Err(malformed()),
        }
    }

    fn term(&self, term: Term<'_>) -> Result<f64, EvalError> {
        match term {
            Term::Node(expr) => self.eval(expr),
            Term::Value(value) => Ok(value),
        }
    }

    fn apply(&self, op: Operator, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        if op == Operator::Divide
            && rhs == 0.0
            && self.config.division_policy() == DivisionPolicy::Reject
        {
            return Err(EvalError::DivisionByZero);
        }
        Ok(op.apply(lhs, rhs))
    }
}

//! Incremental construction of composite nodes.
//!
//! [`CompositeBuilder`] owns the element and operator lists of one
//! parenthesis-free span. Multiplicative operators are folded as soon as
//! their right operand arrives, so only additive operators survive into the
//! finished [`Expr::Composite`]. [`LiteralBuffer`] accumulates the digit runs
//! of the number currently being read.

use log::trace;

use crate::parser::ast::{Expr, Operator};

/// Structural problems detected while inserting into a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Misplaced {
    /// An operand arrived while the previous one still lacks an operator.
    Operand,
    /// An operator arrived, or the span ended, with no operand after the
    /// previous operator.
    Operator,
}

#[derive(Debug, Default)]
pub(crate) struct CompositeBuilder {
    elements: Vec<Expr>,
    operators: Vec<Operator>,
}

impl CompositeBuilder {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// True while the last recorded operator still awaits its right operand.
    fn awaiting_operand(&self) -> bool {
        self.elements.len() == self.operators.len()
    }

    /// Insert a finished element, folding it into the previous element when
    /// the pending operator is `*` or `/`.
    pub(crate) fn insert(&mut self, element: Expr) -> Result<(), Misplaced> {
        if !self.awaiting_operand() {
            return Err(Misplaced::Operand);
        }
        match self.operators.last().copied() {
            Some(op) if op.is_multiplicative() => {
                let previous = self.elements.pop().ok_or(Misplaced::Operator)?;
                self.operators.pop();
                trace!("folding {op} into a binary node");
                self.elements.push(Expr::binary(previous, element, op));
            }
            _ => self.elements.push(element),
        }
        Ok(())
    }

    /// Record an operator that follows the current element.
    pub(crate) fn push_operator(&mut self, op: Operator) -> Result<(), Misplaced> {
        if self.awaiting_operand() {
            return Err(Misplaced::Operator);
        }
        self.operators.push(op);
        Ok(())
    }

    /// Close the span with the trailing `0` and `+` pair.
    pub(crate) fn finish(mut self) -> Result<Expr, Misplaced> {
        if self.awaiting_operand() {
            return Err(Misplaced::Operator);
        }
        self.elements.push(Expr::literal(0.0));
        self.operators.push(Operator::Add);
        Ok(Expr::composite(self.elements, self.operators))
    }
}

/// Text of the number currently being read.
///
/// The buffer of a fresh span holds an implicit `0`, so a leading `.5` reads
/// as `0.5` and a leading `+` or `-` applies to zero. Once flushed the buffer
/// starts empty.
#[derive(Debug)]
pub(crate) struct LiteralBuffer {
    implicit_zero: bool,
    digits: String,
    start: Option<usize>,
}

/// A buffered number ready for conversion.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct PendingLiteral {
    pub(crate) text: String,
    pub(crate) index: usize,
}

impl LiteralBuffer {
    #[must_use]
    pub(crate) fn implicit_zero() -> Self {
        Self {
            implicit_zero: true,
            digits: String::new(),
            start: None,
        }
    }

    /// Append a digit run found at `index`.
    pub(crate) fn push(&mut self, run: &str, index: usize) {
        self.start.get_or_insert(index);
        self.digits.push_str(run);
    }

    /// Whether digits have been read since the last flush.
    #[must_use]
    pub(crate) fn has_digits(&self) -> bool {
        self.start.is_some()
    }

    /// Empty the buffer, discarding the implicit zero.
    pub(crate) fn clear(&mut self) {
        self.implicit_zero = false;
        self.digits.clear();
        self.start = None;
    }

    /// Take the buffered number, leaving the buffer empty.
    ///
    /// Returns `None` when nothing, not even the implicit zero, is buffered.
    pub(crate) fn take(&mut self) -> Option<PendingLiteral> {
        if !self.implicit_zero && self.digits.is_empty() {
            return None;
        }
        let text = if self.implicit_zero {
            format!("0{}", self.digits)
        } else {
            std::mem::take(&mut self.digits)
        };
        let index = self.start.unwrap_or(0);
        self.clear();
        Some(PendingLiteral { text, index })
    }
}

//! Expression tree for arithmetic expressions.
//!
//! A parsed expression is a tree of three node kinds. Multiplicative
//! operators are resolved while parsing, so they appear as `Binary` nodes; a
//! `Composite` holds one parenthesis-free span reduced to a flat list of
//! elements separated by additive operators only.

use super::Operator;

/// Parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A terminal number.
    Literal(f64),
    /// A multiplication or division resolved at parse time.
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Elements folded left to right with the operators between them.
    ///
    /// Trees produced by the parser always hold one more element than
    /// operators, the last pair being a trailing `0` and `+`.
    Composite {
        elements: Vec<Expr>,
        operators: Vec<Operator>,
    },
}

impl Expr {
    #[must_use]
    pub fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    #[must_use]
    pub fn binary(lhs: Self, rhs: Self, op: Operator) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    #[must_use]
    pub fn composite(elements: Vec<Self>, operators: Vec<Operator>) -> Self {
        Self::Composite {
            elements,
            operators,
        }
    }

    /// Render the expression in bracketed form for diagnostics.
    ///
    /// Each element is wrapped in `[...]`, followed by a space and the
    /// operator symbols, all inside parentheses. A `Binary` node renders as a
    /// two-element group with its single operator.
    ///
    /// Literals use the `Debug` text of `f64`. For magnitudes from `1e-3` up
    /// to but excluding `1e7` this is the conventional decimal text with at
    /// least one fractional digit (`2.0`, `0.125`, `1234567.5`). Outside that
    /// range it differs from computerized scientific notation: values stay
    /// positional down to `1e-4` and below `1e16` (`1e7` renders as
    /// `10000000.0`, `0.0005` as `0.0005`), and only beyond those bounds
    /// switch to an exponent without a fractional part (`1e16`, `1e-5`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldcalc::parse;
    ///
    /// let expr = parse("2*3+1").unwrap();
    /// assert_eq!(expr.render(), "([([2.0][3.0] *)][1.0][0.0] ++)");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::Literal(value) => out.push_str(&format!("{value:?}")),
            Self::Binary { .. } => self.render_chain(out),
            Self::Composite {
                elements,
                operators,
            } => render_group(out, elements, operators.iter().copied()),
        }
    }

    /// Renders a left-leaning run of `Binary` nodes without recursing down
    /// its left spine.
    fn render_chain(&self, out: &mut String) {
        let mut pending = Vec::new();
        let mut base = self;
        while let Self::Binary { op, lhs, rhs } = base {
            pending.push((*op, &**rhs));
            base = &**lhs;
        }
        for _ in &pending {
            out.push_str("([");
        }
        base.render_into(out);
        for (op, rhs) in pending.into_iter().rev() {
            out.push_str("][");
            rhs.render_into(out);
            out.push_str("] ");
            out.push(op.symbol());
            out.push(')');
        }
    }

    /// Moves the children of this node onto `stack`, leaving it childless.
    fn detach_children(&mut self, stack: &mut Vec<Self>) {
        match self {
            Self::Literal(_) => {}
            Self::Binary { lhs, rhs, .. } => {
                stack.push(std::mem::replace(&mut **lhs, Self::Literal(0.0)));
                stack.push(std::mem::replace(&mut **rhs, Self::Literal(0.0)));
            }
            Self::Composite { elements, .. } => stack.append(elements),
        }
    }
}

impl Drop for Expr {
    // A long `*` chain is as deep as it is long; tear it down from a heap
    // stack instead of the call stack.
    fn drop(&mut self) {
        if matches!(self, Self::Literal(_)) {
            return;
        }
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut node) = stack.pop() {
            node.detach_children(&mut stack);
        }
    }
}

fn render_group<'a>(
    out: &mut String,
    elements: impl IntoIterator<Item = &'a Expr>,
    operators: impl Iterator<Item = Operator>,
) {
    out.push('(');
    for element in elements {
        out.push('[');
        element.render_into(out);
        out.push(']');
    }
    out.push(' ');
    out.extend(operators.map(Operator::symbol));
    out.push(')');
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests;

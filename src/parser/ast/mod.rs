//! Typed expression tree and operator registry.
//!
//! [`Expr`] is the only node type the parser produces; [`Operator`] binds
//! each supported symbol to its arithmetic.

mod expr;
mod operator;

pub use expr::Expr;
pub use operator::{Operator, UnknownOperator};

//! Syntax kinds for arithmetic expressions.
//!
//! This module defines the `SyntaxKind` enum covering every token the
//! tokenizer can emit. The parser dispatches on these kinds while scanning a
//! (sub)expression, so the set mirrors the accepted alphabet exactly: digit
//! runs, the four binary operators and parentheses. Anything else is tagged
//! `N_ERROR`.

/// Every possible token in an arithmetic expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[expect(non_camel_case_types, reason = "token naming follows the tokenizer tables")]
pub enum SyntaxKind {
    // Tokens
    T_NUMBER,
    T_PLUS,
    T_MINUS,
    T_STAR,
    T_SLASH,
    T_LPAREN,
    T_RPAREN,
    // Errors
    N_ERROR,
}

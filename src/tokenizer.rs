//! Lexical analysis for arithmetic expressions.
//!
//! This module exposes [`tokenize`], which converts raw expression text into a
//! sequence of `(SyntaxKind, Span)` pairs. It uses the `logos` crate to
//! recognise tokens. Digits and decimal points form a single `T_NUMBER` run so
//! the parser can feed them straight into its literal buffer. Any other input,
//! whitespace included, becomes an `N_ERROR` token so the parser can report
//! the exact offending position.

use logos::Logos;

use crate::SyntaxKind;

/// Byte range for a token within the source.
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    #[regex(r"[0-9.]+")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
}

/// Tokenise an arithmetic expression.
///
/// Unrecognised input is not dropped: each lexer failure is kept as an
/// `N_ERROR` token covering the rejected bytes.
///
/// # Examples
///
/// ```rust
/// use foldcalc::{tokenize, SyntaxKind};
///
/// let tokens = tokenize("2*(1.5+3)");
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[0], (SyntaxKind::T_NUMBER, 0..1));
/// assert_eq!(tokens[3], (SyntaxKind::T_NUMBER, 3..6));
/// ```
#[must_use]
pub fn tokenize(src: &str) -> Vec<(SyntaxKind, Span)> {
    let mut lexer = Token::lexer(src);
    let mut out = Vec::with_capacity(src.len());
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let Ok(token) = result else {
            out.push((SyntaxKind::N_ERROR, span));
            continue;
        };
        let kind = match token {
            Token::Number => SyntaxKind::T_NUMBER,
            Token::Plus => SyntaxKind::T_PLUS,
            Token::Minus => SyntaxKind::T_MINUS,
            Token::Star => SyntaxKind::T_STAR,
            Token::Slash => SyntaxKind::T_SLASH,
            Token::LParen => SyntaxKind::T_LPAREN,
            Token::RParen => SyntaxKind::T_RPAREN,
        };
        out.push((kind, span));
    }
    out
}

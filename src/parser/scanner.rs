//! Left-to-right scan that turns one (sub)expression into a composite node.
//!
//! Digit runs accumulate in a [`LiteralBuffer`], operators flush it, and a
//! `(` recurses into a fresh scan of the group's contents. Every finished
//! operand goes through [`CompositeBuilder::insert`], which resolves `*` and
//! `/` on the spot.

use log::debug;

use crate::SyntaxKind;
use crate::config::Config;
use crate::parser::ast::{Expr, Operator};

use super::composite::{CompositeBuilder, LiteralBuffer, Misplaced, PendingLiteral};
use super::delimiter::find_matching_close;
use super::errors::ParseError;
use super::token_stream::TokenStream;

pub(crate) struct Scanner<'c> {
    config: &'c Config,
}

/// Per-span state threaded through the token handlers.
struct ScanState<'a> {
    stream: TokenStream<'a>,
    builder: CompositeBuilder,
    literal: LiteralBuffer,
    last_operator: usize,
    depth: usize,
}

impl<'c> Scanner<'c> {
    #[must_use]
    pub(crate) fn new(config: &'c Config) -> Self {
        Self { config }
    }

    /// Scan `stream`, which sits `depth` groups below the top level.
    pub(crate) fn scan(&self, stream: TokenStream<'_>, depth: usize) -> Result<Expr, ParseError> {
        check_leading_operator(&stream)?;
        let mut state = ScanState {
            stream,
            builder: CompositeBuilder::new(),
            literal: LiteralBuffer::implicit_zero(),
            last_operator: 0,
            depth,
        };
        while let Some((kind, span)) = state.stream.peek().cloned() {
            let index = state.stream.relative(span.start);
            match kind {
                SyntaxKind::T_NUMBER => {
                    let run = state.stream.slice(&span);
                    state.literal.push(run, index);
                    state.stream.advance();
                }
                SyntaxKind::T_PLUS
                | SyntaxKind::T_MINUS
                | SyntaxKind::T_STAR
                | SyntaxKind::T_SLASH => {
                    let symbol = state.stream.char_at(span.start).unwrap_or('\0');
                    handle_operator(&mut state, symbol, index)?;
                }
                SyntaxKind::T_LPAREN => self.handle_group(&mut state, index)?,
                SyntaxKind::T_RPAREN => {
                    return Err(ParseError::UnmatchedParentheses {
                        index,
                        expression: state.stream.text().to_string(),
                    });
                }
                SyntaxKind::N_ERROR => {
                    let character = state
                        .stream
                        .char_at(span.start)
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(ParseError::UnrecognizedCharacter {
                        character,
                        index,
                        expression: state.stream.text().to_string(),
                    });
                }
            }
        }
        flush_literal(&mut state)?;
        let ScanState {
            stream,
            builder,
            last_operator,
            ..
        } = state;
        builder
            .finish()
            .map_err(|_| ParseError::MissingOperand {
                index: last_operator,
                expression: stream.text().to_string(),
            })
    }

    fn handle_group(&self, state: &mut ScanState<'_>, index: usize) -> Result<(), ParseError> {
        let open = state.stream.cursor();
        let close = find_matching_close(state.stream.tokens(), open).ok_or_else(|| {
            ParseError::UnmatchedParentheses {
                index,
                expression: state.stream.text().to_string(),
            }
        })?;
        if close == open + 1 {
            return Err(ParseError::EmptyParentheses {
                index,
                expression: state.stream.text().to_string(),
            });
        }
        if state.literal.has_digits() {
            return Err(missing_operator(&state.stream, index));
        }
        state.literal.clear();
        let depth = state.depth + 1;
        if depth > self.config.max_depth() {
            return Err(ParseError::NestingTooDeep {
                limit: self.config.max_depth(),
            });
        }
        let group = state
            .stream
            .group(open, close)
            .ok_or_else(|| ParseError::UnmatchedParentheses {
                index,
                expression: state.stream.text().to_string(),
            })?;
        debug!("parsing group {:?} at depth {depth}", group.text());
        let inner = self.scan(group, depth)?;
        insert_operand(state, inner, index)?;
        state.stream.skip_past(close);
        Ok(())
    }
}

fn check_leading_operator(stream: &TokenStream<'_>) -> Result<(), ParseError> {
    match stream.first() {
        Some((SyntaxKind::T_STAR | SyntaxKind::T_SLASH, span)) => {
            Err(ParseError::InvalidLeadingOperator {
                operator: stream.char_at(span.start).unwrap_or('*'),
                expression: stream.text().to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn handle_operator(state: &mut ScanState<'_>, symbol: char, index: usize) -> Result<(), ParseError> {
    flush_literal(state)?;
    let op = Operator::from_symbol(symbol)?;
    state
        .builder
        .push_operator(op)
        .map_err(|_| ParseError::MissingOperand {
            index: state.last_operator,
            expression: state.stream.text().to_string(),
        })?;
    state.last_operator = index;
    state.stream.advance();
    Ok(())
}

fn flush_literal(state: &mut ScanState<'_>) -> Result<(), ParseError> {
    let Some(PendingLiteral { text, index }) = state.literal.take() else {
        return Ok(());
    };
    let value = text
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            literal: text.clone(),
            index,
            expression: state.stream.text().to_string(),
        })?;
    insert_operand(state, Expr::literal(value), index)
}

fn insert_operand(state: &mut ScanState<'_>, operand: Expr, index: usize) -> Result<(), ParseError> {
    state.builder.insert(operand).map_err(|misplaced| match misplaced {
        Misplaced::Operand => missing_operator(&state.stream, index),
        Misplaced::Operator => ParseError::MissingOperand {
            index: state.last_operator,
            expression: state.stream.text().to_string(),
        },
    })
}

fn missing_operator(stream: &TokenStream<'_>, index: usize) -> ParseError {
    ParseError::MissingOperator {
        index,
        expression: stream.text().to_string(),
    }
}

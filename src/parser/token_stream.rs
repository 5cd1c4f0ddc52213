//! Token stream utilities.
//!
//! Provides a cursor-based wrapper around the tokens of one (sub)expression.
//! Each stream knows the byte range of the text it covers, so positions can
//! be reported relative to the expression being scanned and parenthesised
//! groups can be carved out as nested streams without re-tokenising.

use crate::{Span, SyntaxKind};

#[derive(Debug, Clone)]
pub(crate) struct TokenStream<'a> {
    tokens: &'a [(SyntaxKind, Span)],
    src: &'a str,
    range: Span,
    cursor: usize,
}

impl<'a> TokenStream<'a> {
    /// Constructs a stream over `tokens`, which must lie within `range` of
    /// `src`.
    #[must_use]
    pub(crate) fn new(tokens: &'a [(SyntaxKind, Span)], src: &'a str, range: Span) -> Self {
        Self {
            tokens,
            src,
            range,
            cursor: 0,
        }
    }

    #[must_use]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the token at the current cursor position, if any.
    #[must_use]
    pub(crate) fn peek(&self) -> Option<&(SyntaxKind, Span)> {
        self.tokens.get(self.cursor)
    }

    /// Returns the first token of the stream regardless of the cursor.
    #[must_use]
    pub(crate) fn first(&self) -> Option<&(SyntaxKind, Span)> {
        self.tokens.first()
    }

    /// Moves the cursor forward by one token if not already at the end.
    pub(crate) fn advance(&mut self) {
        if self.cursor < self.tokens.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor just past the token at `idx`.
    pub(crate) fn skip_past(&mut self, idx: usize) {
        self.cursor = (idx + 1).min(self.tokens.len());
    }

    #[must_use]
    pub(crate) fn tokens(&self) -> &[(SyntaxKind, Span)] {
        self.tokens
    }

    /// Returns the text of the expression this stream covers.
    #[must_use]
    pub(crate) fn text(&self) -> &'a str {
        self.src.get(self.range.clone()).unwrap_or("")
    }

    /// Returns the source text of a single token.
    #[must_use]
    pub(crate) fn slice(&self, span: &Span) -> &'a str {
        self.src.get(span.clone()).unwrap_or("")
    }

    /// Returns the character starting at the absolute byte `offset`.
    #[must_use]
    pub(crate) fn char_at(&self, offset: usize) -> Option<char> {
        self.src.get(offset..).and_then(|rest| rest.chars().next())
    }

    /// Converts an absolute byte offset into one relative to this expression.
    #[must_use]
    pub(crate) fn relative(&self, offset: usize) -> usize {
        offset.saturating_sub(self.range.start)
    }

    /// Builds a stream over the tokens strictly between the parentheses at
    /// `open` and `close`.
    ///
    /// Returns `None` when the indices do not describe a group in this
    /// stream.
    #[must_use]
    pub(crate) fn group(&self, open: usize, close: usize) -> Option<Self> {
        let (_, open_span) = self.tokens.get(open)?;
        let (_, close_span) = self.tokens.get(close)?;
        let inner = self.tokens.get(open + 1..close)?;
        Some(Self::new(inner, self.src, open_span.end..close_span.start))
    }
}

#[cfg(test)]
mod tests {
    use super::TokenStream;
    use crate::tokenize;
    use rstest::rstest;

    #[test]
    fn advance_stops_at_end() {
        let src = "1+2";
        let tokens = tokenize(src);
        let mut stream = TokenStream::new(&tokens, src, 0..src.len());
        for _ in 0..5 {
            stream.advance();
        }
        assert_eq!(stream.cursor(), tokens.len());
        assert!(stream.peek().is_none());
    }

    #[rstest]
    #[case("(1+2)*3", 0, 4, "1+2", 3)]
    #[case("4-(12/3)", 2, 6, "12/3", 3)]
    #[case("((7))", 0, 4, "(7)", 3)]
    fn group_covers_inner_text(
        #[case] src: &str,
        #[case] open: usize,
        #[case] close: usize,
        #[case] expected: &str,
        #[case] token_count: usize,
    ) {
        let tokens = tokenize(src);
        let stream = TokenStream::new(&tokens, src, 0..src.len());
        let group = stream
            .group(open, close)
            .unwrap_or_else(|| panic!("group {open}..{close} missing"));
        assert_eq!(group.text(), expected);
        assert_eq!(group.tokens().len(), token_count);
    }

    #[test]
    fn relative_offsets_are_measured_from_group_start() {
        let src = "2*(3+a)";
        let tokens = tokenize(src);
        let stream = TokenStream::new(&tokens, src, 0..src.len());
        let group = stream
            .group(2, 6)
            .unwrap_or_else(|| panic!("group missing"));
        assert_eq!(group.relative(5), 2);
        assert_eq!(group.slice(&(5..6)), "a");
        assert_eq!(group.char_at(5), Some('a'));
    }

    #[test]
    fn skip_past_is_clamped() {
        let src = "1";
        let tokens = tokenize(src);
        let mut stream = TokenStream::new(&tokens, src, 0..src.len());
        stream.skip_past(10);
        assert_eq!(stream.cursor(), 1);
    }
}

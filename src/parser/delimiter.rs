//! Parenthesis matching for grouped sub-expressions.
//!
//! The scan counts openings and closings separately, starting with the group
//! opener already counted, and stops at the first token where the two totals
//! agree.

use crate::{Span, SyntaxKind};

/// Tracks parenthesis counts while scanning for a group's closing token.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParenDepths {
    opened: usize,
    closed: usize,
}

impl ParenDepths {
    /// Counts for a scan that starts just after an opening parenthesis.
    #[must_use]
    pub(crate) fn after_open() -> Self {
        Self {
            opened: 1,
            closed: 0,
        }
    }

    pub(crate) fn apply(&mut self, kind: SyntaxKind) {
        match kind {
            SyntaxKind::T_LPAREN => self.opened += 1,
            SyntaxKind::T_RPAREN => self.closed += 1,
            _ => {}
        }
    }

    #[must_use]
    pub(crate) fn is_balanced(&self) -> bool {
        self.opened == self.closed
    }
}

/// Return the index of the `)` closing the `(` at `open`.
///
/// `None` means the group is never closed within `tokens`.
#[must_use]
pub(crate) fn find_matching_close(tokens: &[(SyntaxKind, Span)], open: usize) -> Option<usize> {
    let mut depths = ParenDepths::after_open();
    tokens
        .iter()
        .enumerate()
        .skip(open + 1)
        .find_map(|(idx, (kind, _))| {
            depths.apply(*kind);
            depths.is_balanced().then_some(idx)
        })
}

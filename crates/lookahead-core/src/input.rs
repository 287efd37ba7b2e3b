//! Source input cursor
//!
//! Parsers walk an [`Input`] cursor over borrowed source text. The cursor is
//! `Copy`: a predicate hands its subject parser a copy and keeps the original
//! untouched, so lookahead needs no rewind bookkeeping.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A position in the source text (1-indexed line and column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Byte offset from the start of the source
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

impl Position {
    /// The position at the start of the source
    pub fn start() -> Self {
        Self { offset: 0, line: 1, column: 1 }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Cursor over source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Input<'a> {
    fragment: &'a str,
    position: Position,
}

impl<'a> Input<'a> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'a str) -> Self {
        Self {
            fragment: source,
            position: Position::start(),
        }
    }

    /// The remaining unparsed text
    pub fn fragment(&self) -> &'a str {
        self.fragment
    }

    /// The current position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether any input remains
    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty()
    }

    /// Remaining length in bytes
    pub fn len(&self) -> usize {
        self.fragment.len()
    }

    /// Split off the first `n` bytes as the matched slice and return the
    /// advanced cursor alongside it. `n` must lie on a char boundary of the
    /// remaining fragment.
    pub fn advance(&self, n: usize) -> (Input<'a>, &'a str) {
        let (matched, rest) = self.fragment.split_at(n);

        let mut line = self.position.line;
        let mut column = self.position.column;
        for ch in matched.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        let next = Input {
            fragment: rest,
            position: Position {
                offset: self.position.offset + n,
                line,
                column,
            },
        };
        (next, matched)
    }
}

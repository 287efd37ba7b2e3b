//! Parse errors

use crate::input::{Input, Position};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parse error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseError {
    /// The input did not match what the parser required
    #[error("{position}: expected {expected}, found {found}")]
    Expected {
        /// What the parser required
        expected: String,
        /// What was found instead
        found: String,
        /// Where the mismatch occurred
        position: Position,
    },

    /// The input ended where the parser required more
    #[error("{position}: expected {expected}, found end of input")]
    UnexpectedEof {
        /// What the parser required
        expected: String,
        /// Where the input ended
        position: Position,
    },

    /// Input matched where a parser required no match
    #[error("{position}: unexpected {found}")]
    Unexpected {
        /// The text that unexpectedly matched
        found: String,
        /// Where the match occurred
        position: Position,
    },
}

impl ParseError {
    /// The position at which the error occurred
    pub fn position(&self) -> Position {
        match self {
            ParseError::Expected { position, .. } => *position,
            ParseError::UnexpectedEof { position, .. } => *position,
            ParseError::Unexpected { position, .. } => *position,
        }
    }
}

/// Result of a parse: the remaining input paired with the parsed value
pub type ParseResult<'a, T> = Result<(Input<'a>, T), ParseError>;

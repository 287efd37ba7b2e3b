//! Parser trait and primitive parsers
//!
//! The primitives here are deliberately small: exact strings, single
//! characters, identifiers, and digit runs. They exist to anchor the
//! predicate operators in [`crate::operator`], not to be a grammar engine.

use crate::error::{ParseError, ParseResult};
use crate::input::Input;

/// A parser over borrowed source text
pub trait Parser<'a> {
    /// The value produced on a successful parse
    type Output;

    /// Run the parser, returning the remaining input and the parsed value
    fn parse(&self, input: Input<'a>) -> ParseResult<'a, Self::Output>;
}

impl<'a, F, T> Parser<'a> for F
where
    F: Fn(Input<'a>) -> ParseResult<'a, T>,
{
    type Output = T;

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, T> {
        self(input)
    }
}

/// Describe the text at the cursor for error messages
pub(crate) fn found_at(input: Input<'_>) -> String {
    match input.fragment().chars().next() {
        Some(ch) => format!("'{}'", ch),
        None => "end of input".to_string(),
    }
}

/// Exact string match (see [`lit`])
pub struct Literal {
    expected: &'static str,
}

/// Match `expected` exactly, producing the matched slice
pub fn lit(expected: &'static str) -> Literal {
    Literal { expected }
}

impl<'a> Parser<'a> for Literal {
    type Output = &'a str;

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, &'a str> {
        if input.fragment().starts_with(self.expected) {
            let (rest, matched) = input.advance(self.expected.len());
            Ok((rest, matched))
        } else if input.is_empty() {
            Err(ParseError::UnexpectedEof {
                expected: format!("\"{}\"", self.expected),
                position: input.position(),
            })
        } else {
            Err(ParseError::Expected {
                expected: format!("\"{}\"", self.expected),
                found: found_at(input),
                position: input.position(),
            })
        }
    }
}

/// Single character match (see [`ch`])
pub struct Char {
    expected: char,
}

/// Match a single character, producing it
pub fn ch(expected: char) -> Char {
    Char { expected }
}

impl<'a> Parser<'a> for Char {
    type Output = char;

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, char> {
        match input.fragment().chars().next() {
            Some(c) if c == self.expected => {
                let (rest, _) = input.advance(c.len_utf8());
                Ok((rest, c))
            }
            Some(_) => Err(ParseError::Expected {
                expected: format!("'{}'", self.expected),
                found: found_at(input),
                position: input.position(),
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: format!("'{}'", self.expected),
                position: input.position(),
            }),
        }
    }
}

/// Identifier match (see [`ident`])
pub struct Ident;

/// Match an identifier: a letter or underscore followed by letters, digits,
/// or underscores. Produces the matched slice.
pub fn ident() -> Ident {
    Ident
}

impl<'a> Parser<'a> for Ident {
    type Output = &'a str;

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, &'a str> {
        match input.fragment().chars().next() {
            Some(c) if c.is_alphabetic() || c == '_' => {
                let end = input
                    .fragment()
                    .char_indices()
                    .find(|(_, c)| !(c.is_alphanumeric() || *c == '_'))
                    .map(|(i, _)| i)
                    .unwrap_or(input.len());
                let (rest, matched) = input.advance(end);
                Ok((rest, matched))
            }
            Some(_) => Err(ParseError::Expected {
                expected: "identifier".to_string(),
                found: found_at(input),
                position: input.position(),
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: "identifier".to_string(),
                position: input.position(),
            }),
        }
    }
}

/// Digit run match (see [`digits`])
pub struct Digits;

/// Match one or more ASCII digits, producing the matched slice
pub fn digits() -> Digits {
    Digits
}

impl<'a> Parser<'a> for Digits {
    type Output = &'a str;

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, &'a str> {
        match input.fragment().chars().next() {
            Some(c) if c.is_ascii_digit() => {
                let end = input
                    .fragment()
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(input.len());
                let (rest, matched) = input.advance(end);
                Ok((rest, matched))
            }
            Some(_) => Err(ParseError::Expected {
                expected: "digits".to_string(),
                found: found_at(input),
                position: input.position(),
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: "digits".to_string(),
                position: input.position(),
            }),
        }
    }
}

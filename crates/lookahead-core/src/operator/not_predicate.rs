//! Negative lookahead (not-predicate)
//!
//! `not_predicate(p)` is the PEG `!p` operator: it succeeds exactly when `p`
//! fails at the current position, leaves the input cursor untouched, and
//! produces no value.

use crate::error::{ParseError, ParseResult};
use crate::input::Input;
use crate::parser::Parser;
use tracing::trace;

/// Negative lookahead over a subject parser
pub struct NotPredicate<P> {
    subject: P,
}

/// Assert that `subject` does not match at the current position.
///
/// When the subject matches anyway, the error quotes the text it matched.
pub fn not_predicate<P>(subject: P) -> NotPredicate<P> {
    NotPredicate { subject }
}

impl<'a, P> Parser<'a> for NotPredicate<P>
where
    P: Parser<'a>,
{
    type Output = ();

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, ()> {
        match self.subject.parse(input) {
            Ok((rest, _)) => {
                let len = rest.position().offset - input.position().offset;
                let found = &input.fragment()[..len];
                trace!(position = %input.position(), found, "not-predicate failed");
                Err(ParseError::Unexpected {
                    found: format!("\"{}\"", found),
                    position: input.position(),
                })
            }
            Err(_) => {
                trace!(position = %input.position(), "not-predicate held");
                Ok((input, ()))
            }
        }
    }
}

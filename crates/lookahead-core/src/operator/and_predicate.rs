//! Positive lookahead (and-predicate)
//!
//! `and_predicate(p)` is the PEG `&p` operator: it succeeds exactly when `p`
//! succeeds at the current position, leaves the input cursor untouched, and
//! produces no value.

use crate::error::ParseResult;
use crate::input::Input;
use crate::parser::Parser;
use tracing::trace;

/// Positive lookahead over a subject parser
pub struct AndPredicate<P> {
    subject: P,
}

/// Assert that `subject` matches at the current position.
///
/// On success the original input is returned unchanged with output `()`. On
/// failure the subject's error is propagated as-is, so the report points at
/// the position where the lookahead was checked.
pub fn and_predicate<P>(subject: P) -> AndPredicate<P> {
    AndPredicate { subject }
}

impl<'a, P> Parser<'a> for AndPredicate<P>
where
    P: Parser<'a>,
{
    type Output = ();

    fn parse(&self, input: Input<'a>) -> ParseResult<'a, ()> {
        // Input is Copy: the subject parses a copy, the original survives
        match self.subject.parse(input) {
            Ok(_) => {
                trace!(position = %input.position(), "and-predicate held");
                Ok((input, ()))
            }
            Err(err) => {
                trace!(position = %input.position(), error = %err, "and-predicate failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::parser::{digits, ident, lit};

    #[test]
    fn test_success_consumes_nothing() {
        let input = Input::new("when ready");
        let (rest, ()) = and_predicate(lit("when")).parse(input).unwrap();
        assert_eq!(rest, input);
        assert_eq!(rest.fragment(), "when ready");
    }

    #[test]
    fn test_failure_propagates_subject_error() {
        let err = and_predicate(lit("when")).parse(Input::new("where")).unwrap_err();
        match err {
            ParseError::Expected { expected, .. } => assert_eq!(expected, "\"when\""),
            other => panic!("expected Expected, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_at_eof() {
        let err = and_predicate(ident()).parse(Input::new("")).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEof { .. }));
    }

    #[test]
    fn test_repeated_application_is_idempotent() {
        // Applying the predicate twice at the same position yields the same
        // cursor and the same outcome
        let p = and_predicate(digits());
        let input = Input::new("42");
        let (after_first, ()) = p.parse(input).unwrap();
        let (after_second, ()) = p.parse(after_first).unwrap();
        assert_eq!(after_first, input);
        assert_eq!(after_second, input);
    }

    #[test]
    fn test_guard_then_consume() {
        // The classic use: check what is ahead, then let a consuming parser
        // take it
        let input = Input::new("policy_name: 7");
        let (input, ()) = and_predicate(ident()).parse(input).unwrap();
        let (input, name) = ident().parse(input).unwrap();
        assert_eq!(name, "policy_name");
        assert_eq!(input.fragment(), ": 7");
    }

    #[test]
    fn test_nested_predicates() {
        let input = Input::new("abc");
        let (rest, ()) = and_predicate(and_predicate(ident())).parse(input).unwrap();
        assert_eq!(rest, input);
    }

    #[test]
    fn test_error_position_is_lookahead_position() {
        let input = Input::new("ok 123");
        let (input, _) = lit("ok ").parse(input).unwrap();
        let err = and_predicate(ident()).parse(input).unwrap_err();
        assert_eq!(err.position().column, 4);
    }

    #[test]
    fn test_trace_events_do_not_disturb_result() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let input = Input::new("x");
            let (rest, ()) = and_predicate(lit("x")).parse(input).unwrap();
            assert_eq!(rest, input);
            assert!(and_predicate(lit("y")).parse(input).is_err());
        });
    }

    #[test]
    fn test_subject_output_is_discarded() {
        // The subject produces &str; the predicate produces ()
        let (_, out) = and_predicate(lit("x")).parse(Input::new("xy")).unwrap();
        #[allow(clippy::let_unit_value)]
        let () = out;
    }
}

// Lookahead Core - predicate combinators for string parsers

#![warn(missing_docs)]

//! Core implementation of the lookahead predicate combinators.
//!
//! The centerpiece is [`operator::and_predicate`], the positive-lookahead
//! operator: it runs a subject parser at the current position, succeeds if
//! the subject would match, and consumes nothing. [`operator::not_predicate`]
//! is its negative counterpart. The [`parser`] module carries the trait and
//! the handful of primitives the predicates are built against.
//!
//! Downstream code normally depends on the `lookahead` facade crate rather
//! than on this crate directly.

pub mod error;
pub mod input;
pub mod operator;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use input::{Input, Position};
pub use operator::{and_predicate, not_predicate, AndPredicate, NotPredicate};
pub use parser::{ch, digits, ident, lit, Parser};

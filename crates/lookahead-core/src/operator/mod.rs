//! Predicate operators
//!
//! Lookahead predicates test whether a parser would match at the current
//! position without consuming anything and without producing a value. They
//! are the PEG `&p` / `!p` operators.

pub mod and_predicate;
pub mod not_predicate;

pub use and_predicate::{and_predicate, AndPredicate};
pub use not_predicate::{not_predicate, NotPredicate};

// Lookahead - public surface for the predicate combinators

#![warn(missing_docs)]

//! Lookahead predicate combinators.
//!
//! This crate defines no items of its own: it re-exports the public surface
//! of `lookahead-core` so downstream code has one stable import path that
//! survives internal reorganization. Re-exports are plain `pub use`, so
//! importing an item through several routes in one crate always resolves to
//! the same type.
//!
//! ```
//! use lookahead::{and_predicate, ident, Input, Parser};
//!
//! let input = Input::new("policy_name: 7");
//! let (input, ()) = and_predicate(ident()).parse(input)?;
//! // Nothing was consumed; a consuming parser takes over
//! let (_, name) = ident().parse(input)?;
//! assert_eq!(name, "policy_name");
//! # Ok::<(), lookahead::ParseError>(())
//! ```

pub use lookahead_core::error::{ParseError, ParseResult};
pub use lookahead_core::input::{Input, Position};
pub use lookahead_core::operator::{
    self, and_predicate, not_predicate, AndPredicate, NotPredicate,
};
pub use lookahead_core::parser::{self, ch, digits, ident, lit, Char, Digits, Ident, Literal, Parser};

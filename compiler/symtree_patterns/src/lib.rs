//! Symtree Patterns - match trees against shapes with named holes.
//!
//! A [`Pattern`] is a tree in which some symbol positions are holes. Matching
//! a candidate records what each hole bound to in a [`Bindings`] map;
//! substitution rebuilds a tree from a pattern and a set of bindings.
//!
//! # Semantics
//!
//! - A hole binds on first sight and is checked on every later sight, so
//!   `(+ x x)` only matches lists whose two operands are equal.
//! - Literal-vs-hole classification happens once, in
//!   [`Pattern::from_example`]. Matching is a plain recursive walk.
//! - Matching is not transactional. Bindings written before a failure stay
//!   in the map. Use [`Pattern::match_fresh`] when that matters.
//!
//! # Logging
//!
//! Entry points emit `tracing` events at `trace` level. Callers that want a
//! plain message stream instead can pass a [`DebugLog`] to the `_logged`
//! variants.

mod bindings;
mod debug_log;
mod errors;
mod pattern;

pub use bindings::Bindings;
pub use debug_log::DebugLog;
pub use errors::{MatchError, MatchResult, SubstituteError, SubstituteResult};
pub use pattern::Pattern;

pub use symtree_ir::{List, Shape, Tree};

//! Symtree IR - immutable, s-expression-like trees.
//!
//! This crate contains the data model shared by the pattern engine and the
//! textual codec:
//! - [`Tree`]: a closed sum of `Invalid`, `Symbol`, `Number` and `List`
//! - [`List`]: an immutable, order-preserving sequence of trees
//! - [`Shape`]: the discriminant of a tree, for callers that only need the tag
//!
//! # Design Philosophy
//!
//! - **Immutable**: there is no mutation API. Payloads are reference counted,
//!   so cloning a tree is O(1) and trees are freely shareable across threads.
//! - **Structural equality**: `==` compares shape and contents recursively.
//!   Two trees built independently compare equal when they have the same
//!   structure; storage identity never matters.
//! - **Total access**: [`List::at`] never fails. Out-of-range indices yield
//!   the `Invalid` tree, so callers can probe without bounds checks.

mod list;
mod tree;

pub use list::List;
pub use tree::{Shape, Tree};

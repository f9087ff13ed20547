//! Symtree S-expressions - textual form of symtrees.
//!
//! # Grammar
//!
//! ```text
//! form := list | atom
//! list := '(' ws* (form ws*)* ')'
//! atom := one or more characters other than whitespace and ')'
//! ```
//!
//! An atom that parses as an `i64` is a number; any other atom is a symbol.
//! Leading whitespace before a form is skipped.
//!
//! # Printed form
//!
//! The writer prints `<invalid symtree>` for invalid trees, symbols as their
//! name, numbers in decimal, and lists as `(a b c)` with single spaces.
//! Reading the printed form of a tree without invalid parts gives back an
//! equal tree.

mod cursor;
mod error;
mod reader;
mod writer;

pub use error::ReadError;
pub use reader::{read_all, read_sexpr, Reader};
pub use writer::{to_sexpr, write_sexpr};

//! Optional debug message sink.
//!
//! Passed explicitly to [`Pattern::match_tree_logged`] and
//! [`Pattern::substitute_logged`]. There is no global hook; when no sink is
//! passed, no message is formatted.
//!
//! [`Pattern::match_tree_logged`]: crate::Pattern::match_tree_logged
//! [`Pattern::substitute_logged`]: crate::Pattern::substitute_logged

use std::fmt;

/// Receives formatted debug messages from the pattern engine.
///
/// Any `Fn(fmt::Arguments<'_>)` closure is a `DebugLog`:
///
/// ```
/// use symtree_patterns::{Bindings, Pattern, Tree};
///
/// let log = |args: std::fmt::Arguments<'_>| eprintln!("{args}");
/// let pattern = Pattern::from_example(["x"], &Tree::symbol("x"));
/// let mut bindings = Bindings::new();
/// pattern.match_tree_logged(&Tree::number(1), &mut bindings, &log)?;
/// # Ok::<(), symtree_patterns::MatchError>(())
/// ```
pub trait DebugLog {
    fn debug(&self, args: fmt::Arguments<'_>);
}

impl<F> DebugLog for F
where
    F: Fn(fmt::Arguments<'_>),
{
    fn debug(&self, args: fmt::Arguments<'_>) {
        self(args);
    }
}

#[cfg(test)]
mod tests;

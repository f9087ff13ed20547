//! Error types for matching and substitution.
//!
//! Every failure is plain data returned to the caller. Whether a failed match
//! means "try the next pattern" or "no match" is the caller's decision.

use std::sync::Arc;

use symtree_ir::Tree;

/// Result of [`Pattern::match_tree`](crate::Pattern::match_tree).
pub type MatchResult = Result<(), MatchError>;

/// Result of [`Pattern::substitute`](crate::Pattern::substitute).
pub type SubstituteResult = Result<Tree, SubstituteError>;

/// Why a candidate tree did not match a pattern.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// A hole-free subpattern did not equal the candidate subtree.
    #[error("expected {expected}, got {got}")]
    ExactMismatch { expected: Tree, got: Tree },

    /// A hole's later occurrence disagreed with its first binding.
    #[error("cannot rebind {symbol}, already bound to {current}")]
    AlreadyBound { symbol: Arc<str>, current: Tree },

    /// A list pattern met an atom or an invalid tree.
    #[error("atom cannot match list")]
    AtomCannotMatchList,

    /// A list pattern met a list of a different length.
    #[error("expected a list of length {expected}, not {got}")]
    LengthMismatch { expected: usize, got: usize },
}

/// Why a pattern could not be turned back into a tree.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubstituteError {
    /// A hole had no entry in the bindings.
    #[error("unbound symbol {symbol:?}")]
    NotBound { symbol: Arc<str> },
}

impl MatchError {
    /// Short, stable name of the failure kind.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            MatchError::ExactMismatch { .. } => "exact mismatch",
            MatchError::AlreadyBound { .. } => "already bound",
            MatchError::AtomCannotMatchList => "atom cannot match list",
            MatchError::LengthMismatch { .. } => "length mismatch",
        }
    }
}

impl SubstituteError {
    /// The hole that had no binding.
    pub fn unbound_symbol(&self) -> &str {
        match self {
            SubstituteError::NotBound { symbol } => symbol,
        }
    }
}

//! Patterns: trees with named holes.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use symtree_ir::Tree;
use tracing::trace;

use crate::{Bindings, DebugLog, MatchError, MatchResult, SubstituteError, SubstituteResult};

/// A tree shape with named holes.
///
/// The same hole name may appear in several places. For a candidate to
/// match, every occurrence of a hole must correspond to an equal subtree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Matches only a tree equal to the wrapped one.
    Literal(Tree),
    /// Matches any tree, binding it to the name.
    Hole(Arc<str>),
    /// Matches a list of the same length, element by element.
    List(Vec<Pattern>),
}

impl Pattern {
    /// Build a pattern from an example tree.
    ///
    /// Symbols whose names are in `holes` become holes. Lists become list
    /// patterns over their elements. Everything else, including invalid
    /// trees, becomes a literal.
    pub fn from_example<I, S>(holes: I, example: &Tree) -> Pattern
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let holes: Vec<S> = holes.into_iter().collect();
        let holes: FxHashSet<&str> = holes.iter().map(|hole| hole.as_ref()).collect();
        Self::build(&holes, example)
    }

    fn build(holes: &FxHashSet<&str>, example: &Tree) -> Pattern {
        match example {
            Tree::Symbol(name) if holes.contains(&**name) => Pattern::Hole(Arc::clone(name)),
            Tree::List(list) => {
                Pattern::List(list.iter().map(|elem| Self::build(holes, elem)).collect())
            }
            Tree::Invalid | Tree::Symbol(_) | Tree::Number(_) => {
                Pattern::Literal(example.clone())
            }
        }
    }

    /// Check whether `candidate` matches, recording hole bindings.
    ///
    /// Bindings are written as holes are first seen and are not rolled back
    /// on failure. List elements are matched left to right and the first
    /// failure is returned as is.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn match_tree(&self, candidate: &Tree, bindings: &mut Bindings) -> MatchResult {
        Walk::new(None).match_tree(self, candidate, bindings)
    }

    /// Like [`match_tree`](Self::match_tree), reporting each step to `log`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn match_tree_logged(
        &self,
        candidate: &Tree,
        bindings: &mut Bindings,
        log: &dyn DebugLog,
    ) -> MatchResult {
        Walk::new(Some(log)).match_tree(self, candidate, bindings)
    }

    /// Match into a new map, returning it only if the whole match succeeds.
    pub fn match_fresh(&self, candidate: &Tree) -> Result<Bindings, MatchError> {
        let mut bindings = Bindings::new();
        self.match_tree(candidate, &mut bindings)?;
        Ok(bindings)
    }

    /// Rebuild a tree, replacing each hole with its binding.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn substitute(&self, bindings: &Bindings) -> SubstituteResult {
        Walk::new(None).substitute(self, bindings)
    }

    /// Like [`substitute`](Self::substitute), reporting each step to `log`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn substitute_logged(&self, bindings: &Bindings, log: &dyn DebugLog) -> SubstituteResult {
        Walk::new(Some(log)).substitute(self, bindings)
    }

    /// Distinct hole names, in order of first occurrence.
    pub fn holes(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_holes(&mut names);
        names
    }

    fn collect_holes<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Pattern::Literal(_) => {}
            Pattern::Hole(name) => {
                if !names.contains(&name.as_ref()) {
                    names.push(name);
                }
            }
            Pattern::List(children) => {
                for child in children {
                    child.collect_holes(names);
                }
            }
        }
    }
}

/// Prints the example tree the pattern was built from, holes as their names.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(tree) => fmt::Display::fmt(tree, f),
            Pattern::Hole(name) => f.write_str(name),
            Pattern::List(children) => {
                f.write_str("(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    fmt::Display::fmt(child, f)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// One recursive walk over a pattern, with an optional message sink.
struct Walk<'log> {
    log: Option<&'log dyn DebugLog>,
}

impl<'log> Walk<'log> {
    fn new(log: Option<&'log dyn DebugLog>) -> Self {
        Walk { log }
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        if let Some(log) = self.log {
            log.debug(args);
        }
    }

    fn match_tree(
        &self,
        pattern: &Pattern,
        candidate: &Tree,
        bindings: &mut Bindings,
    ) -> MatchResult {
        match pattern {
            Pattern::Literal(expected) => self.match_literal(expected, candidate),
            Pattern::Hole(name) => self.match_hole(name, candidate, bindings),
            Pattern::List(children) => self.match_list(children, candidate, bindings),
        }
    }

    fn match_literal(&self, expected: &Tree, candidate: &Tree) -> MatchResult {
        if expected == candidate {
            Ok(())
        } else {
            self.debug(format_args!("expected {expected}, got {candidate}"));
            Err(MatchError::ExactMismatch {
                expected: expected.clone(),
                got: candidate.clone(),
            })
        }
    }

    fn match_hole(
        &self,
        name: &Arc<str>,
        candidate: &Tree,
        bindings: &mut Bindings,
    ) -> MatchResult {
        match bindings.get(name) {
            Some(current) if current == candidate => Ok(()),
            Some(current) => {
                trace!(hole = %name, %current, %candidate, "conflicting rebind");
                self.debug(format_args!("{name} is bound to {current}, not {candidate}"));
                Err(MatchError::AlreadyBound {
                    symbol: Arc::clone(name),
                    current: current.clone(),
                })
            }
            None => {
                trace!(hole = %name, %candidate, "bind");
                self.debug(format_args!("bind {name} to {candidate}"));
                bindings.bind(name, candidate.clone());
                Ok(())
            }
        }
    }

    fn match_list(
        &self,
        children: &[Pattern],
        candidate: &Tree,
        bindings: &mut Bindings,
    ) -> MatchResult {
        let list = match candidate {
            Tree::List(list) => list,
            Tree::Invalid | Tree::Symbol(_) | Tree::Number(_) => {
                self.debug(format_args!("{} {candidate} cannot match a list", candidate.shape()));
                return Err(MatchError::AtomCannotMatchList);
            }
        };
        if children.len() != list.len() {
            self.debug(format_args!(
                "expected {} elements, {candidate} has {}",
                children.len(),
                list.len()
            ));
            return Err(MatchError::LengthMismatch {
                expected: children.len(),
                got: list.len(),
            });
        }
        children
            .iter()
            .zip(list)
            .try_for_each(|(child, element)| self.match_tree(child, element, bindings))
    }

    fn substitute(&self, pattern: &Pattern, bindings: &Bindings) -> SubstituteResult {
        match pattern {
            Pattern::Literal(tree) => Ok(tree.clone()),
            Pattern::Hole(name) => match bindings.get(name) {
                Some(tree) => {
                    self.debug(format_args!("substitute {name} with {tree}"));
                    Ok(tree.clone())
                }
                None => {
                    trace!(hole = %name, "unbound hole");
                    self.debug(format_args!("{name} is not bound"));
                    Err(SubstituteError::NotBound {
                        symbol: Arc::clone(name),
                    })
                }
            },
            Pattern::List(children) => {
                let elements = children
                    .iter()
                    .map(|child| self.substitute(child, bindings))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Tree::list(elements))
            }
        }
    }
}

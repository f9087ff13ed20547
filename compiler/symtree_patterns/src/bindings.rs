//! Hole name to tree mapping.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use symtree_ir::Tree;

/// The trees bound to each hole of a pattern.
///
/// Created empty by the caller, filled in by
/// [`Pattern::match_tree`](crate::Pattern::match_tree), and consumed by
/// [`Pattern::substitute`](crate::Pattern::substitute). Keys are unique and
/// unordered.
///
/// Not meant for concurrent use: each thread matching against a shared
/// pattern needs its own map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    map: FxHashMap<Arc<str>, Tree>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree bound to `name`, if any.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Tree> {
        self.map.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Bind `name` to `tree`, returning the previous binding.
    ///
    /// Matching never overwrites a binding. This is for callers seeding a map
    /// before matching or building one for substitution.
    pub fn insert(&mut self, name: impl Into<Arc<str>>, tree: Tree) -> Option<Tree> {
        self.map.insert(name.into(), tree)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over `(name, tree)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tree)> {
        self.map.iter().map(|(name, tree)| (name.as_ref(), tree))
    }

    /// A copy containing only the entries whose names are in `names`.
    pub fn restrict_to<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Bindings {
        names
            .into_iter()
            .filter_map(|name| self.map.get_key_value(name))
            .map(|(name, tree)| (Arc::clone(name), tree.clone()))
            .collect()
    }

    /// Bind a hole seen for the first time.
    pub(crate) fn bind(&mut self, name: &Arc<str>, tree: Tree) {
        self.map.insert(Arc::clone(name), tree);
    }
}

impl<K: Into<Arc<str>>> FromIterator<(K, Tree)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (K, Tree)>>(iter: I) -> Self {
        Bindings {
            map: iter
                .into_iter()
                .map(|(name, tree)| (name.into(), tree))
                .collect(),
        }
    }
}

impl<K: Into<Arc<str>>> Extend<(K, Tree)> for Bindings {
    fn extend<I: IntoIterator<Item = (K, Tree)>>(&mut self, iter: I) {
        self.map
            .extend(iter.into_iter().map(|(name, tree)| (name.into(), tree)));
    }
}

impl IntoIterator for Bindings {
    type Item = (Arc<str>, Tree);
    type IntoIter = std::collections::hash_map::IntoIter<Arc<str>, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

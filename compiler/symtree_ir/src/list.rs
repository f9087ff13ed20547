//! Immutable sequences of trees.

use std::sync::Arc;

use crate::Tree;

static INVALID: Tree = Tree::Invalid;

/// An immutable, 0-indexed sequence of [`Tree`]s.
///
/// Elements live in a shared slice; cloning a list never copies them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct List {
    elements: Arc<[Tree]>,
}

impl List {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at `index`, or the `Invalid` tree if `index` is out of
    /// range. Never panics.
    pub fn at(&self, index: usize) -> &Tree {
        self.elements.get(index).unwrap_or(&INVALID)
    }

    /// The element at `index`, if there is one.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Tree> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tree> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Tree] {
        &self.elements
    }
}

impl FromIterator<Tree> for List {
    fn from_iter<I: IntoIterator<Item = Tree>>(iter: I) -> Self {
        List {
            elements: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Tree>> for List {
    fn from(elements: Vec<Tree>) -> Self {
        List {
            elements: elements.into(),
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tree;
    type IntoIter = std::slice::Iter<'a, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

//! The `Tree` value type.

use std::fmt;
use std::sync::Arc;

use crate::List;

/// An immutable s-expression-like tree.
///
/// A tree is exactly one of:
/// - `Invalid`: the absent value, produced by [`Default`] and by
///   out-of-range [`List::at`]. No constructor helper produces it.
/// - `Symbol`: an opaque identifier compared by exact text.
/// - `Number`: a signed integer compared by value.
/// - `List`: zero or more child trees, order-significant.
///
/// # Equality
///
/// `PartialEq` is structural: same shape and, recursively, equal contents.
/// Two `Invalid` trees are equal to each other, so a pattern built from an
/// invalid example matches an invalid candidate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tree {
    #[default]
    Invalid,
    Symbol(Arc<str>),
    Number(i64),
    List(List),
}

/// The discriminant of a [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Invalid,
    Symbol,
    Number,
    List,
}

impl Shape {
    /// Lowercase name of the shape, for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Invalid => "invalid",
            Shape::Symbol => "symbol",
            Shape::Number => "number",
            Shape::List => "list",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Tree {
    /// Create a symbol tree.
    pub fn symbol(name: impl Into<Arc<str>>) -> Self {
        Tree::Symbol(name.into())
    }

    /// Create a number tree.
    pub const fn number(value: i64) -> Self {
        Tree::Number(value)
    }

    /// Create a list tree from the given elements.
    ///
    /// The elements are collected into storage owned by the new tree, so the
    /// result is independent of whatever collection the caller passed in.
    pub fn list(elements: impl IntoIterator<Item = Tree>) -> Self {
        Tree::List(elements.into_iter().collect())
    }

    /// The shape tag of this tree.
    pub const fn shape(&self) -> Shape {
        match self {
            Tree::Invalid => Shape::Invalid,
            Tree::Symbol(_) => Shape::Symbol,
            Tree::Number(_) => Shape::Number,
            Tree::List(_) => Shape::List,
        }
    }

    /// Structural equality; identical to `==`.
    #[inline]
    pub fn structurally_eq(&self, other: &Tree) -> bool {
        self == other
    }

    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Tree::Invalid)
    }

    /// True for symbols and numbers.
    #[inline]
    pub const fn is_atom(&self) -> bool {
        matches!(self, Tree::Symbol(_) | Tree::Number(_))
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Tree::Symbol(name) => Some(name.as_ref()),
            _ => None,
        }
    }

    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Tree::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Tree::List(list) => Some(list),
            _ => None,
        }
    }

    // Shape dispatch
    //
    // Each method calls `f` only when the receiver has the named shape.
    // Exactly one of the four fires for any tree. A plain `match` on the
    // enum is equivalent and usually clearer.

    /// Call `f` if this tree is invalid.
    pub fn if_invalid(&self, f: impl FnOnce()) {
        if let Tree::Invalid = self {
            f();
        }
    }

    /// Call `f` with the symbol's name if this tree is a symbol.
    pub fn if_symbol(&self, f: impl FnOnce(&str)) {
        if let Tree::Symbol(name) = self {
            f(name.as_ref());
        }
    }

    /// Call `f` with the value if this tree is a number.
    pub fn if_number(&self, f: impl FnOnce(i64)) {
        if let Tree::Number(value) = self {
            f(*value);
        }
    }

    /// Call `f` with the children if this tree is a list.
    pub fn if_list(&self, f: impl FnOnce(&List)) {
        if let Tree::List(list) = self {
            f(list);
        }
    }
}

impl From<i64> for Tree {
    fn from(value: i64) -> Self {
        Tree::Number(value)
    }
}

impl From<&str> for Tree {
    fn from(name: &str) -> Self {
        Tree::symbol(name)
    }
}

impl From<List> for Tree {
    fn from(list: List) -> Self {
        Tree::List(list)
    }
}

/// Renders the s-expression form: `<invalid symtree>`, the symbol text, the
/// decimal number, or `(a b c)`.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tree::Invalid => f.write_str("<invalid symtree>"),
            Tree::Symbol(name) => f.write_str(name),
            Tree::Number(value) => write!(f, "{value}"),
            Tree::List(list) => {
                f.write_str("(")?;
                for (i, element) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    fmt::Display::fmt(element, f)?;
                }
                f.write_str(")")
            }
        }
    }
}

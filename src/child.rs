//! The runtime-erased "child" type shared by every level of the tree.
//!
//! A faithfully typed finger tree has a different child type at every depth
//! (elements at level 0, 2-3 nodes of elements at level 1, 2-3 nodes of those at
//! level 2, and so on forever). Rust has no convenient way to express that
//! infinite family of types, so, per the design notes, the level is erased into
//! a runtime discriminator instead: a [`Child`] is either a leaf value or a
//! boxed [`Node`], and nothing in the types prevents mixing levels within one
//! [`crate::digit::Digit`]; the debug self-check is what actually enforces
//! that no mixing happens.
//!
//! Both variants wrap their payload in `Arc` so that cloning a child, a digit,
//! or a whole tree is a handful of atomic refcount bumps, never a deep copy,
//! and so no bound on `T` is needed to share structure.

use std::fmt;
use std::sync::Arc;

use crate::node::Node;

pub(crate) enum Child<T> {
    Leaf(Arc<T>),
    Node(Arc<Node<T>>),
}

impl<T> Child<T> {
    pub(crate) fn leaf(value: T) -> Self {
        Child::Leaf(Arc::new(value))
    }

    pub(crate) fn measure(&self) -> usize {
        match self {
            Child::Leaf(_) => 1,
            Child::Node(node) => node.measure(),
        }
    }

    /// Unwraps a leaf child. Panics if called on a `Node` child; only ever
    /// called at the point where the tree's own structure guarantees the
    /// child is at level 0.
    pub(crate) fn into_leaf(self) -> Arc<T> {
        match self {
            Child::Leaf(v) => v,
            Child::Node(_) => unreachable!("child was expected to be a leaf"),
        }
    }

    pub(crate) fn as_leaf(&self) -> &Arc<T> {
        match self {
            Child::Leaf(v) => v,
            Child::Node(_) => unreachable!("child was expected to be a leaf"),
        }
    }

    /// Unwraps a node child, for descending one level deeper.
    pub(crate) fn into_node(self) -> Arc<Node<T>> {
        match self {
            Child::Node(n) => n,
            Child::Leaf(_) => unreachable!("child was expected to be a node"),
        }
    }
}

// Hand-written rather than derived: `#[derive(Clone)]` would add a spurious
// `T: Clone` bound, even though cloning only ever bumps an `Arc` refcount.
impl<T> Clone for Child<T> {
    fn clone(&self) -> Self {
        match self {
            Child::Leaf(v) => Child::Leaf(v.clone()),
            Child::Node(n) => Child::Node(n.clone()),
        }
    }
}

// Also hand-written to avoid a spurious `T: Debug` bound: this prints the
// shape (leaf vs. node, and the node's own shape), not the element value.
impl<T> fmt::Debug for Child<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Leaf(_) => write!(f, "Leaf"),
            Child::Node(n) => fmt::Debug::fmt(&**n, f),
        }
    }
}

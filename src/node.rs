//! A branching record of exactly 2 or 3 children, one level deeper than
//! whatever holds it. Nodes are never mutated after construction; their
//! cached measure is computed once, at the point `Node::two`/`Node::three`
//! is called, recomputing the cached measure once at construction time
//! (`examples/noamtashma-grove/src/basic_tree/mod.rs`, `Node::new`).

use std::fmt;

use crate::child::Child;
use crate::digit::Digit;

pub(crate) enum Children<T> {
    Two(Child<T>, Child<T>),
    Three(Child<T>, Child<T>, Child<T>),
}

pub(crate) struct Node<T> {
    measure: usize,
    children: Children<T>,
}

impl<T> Node<T> {
    pub(crate) fn two(a: Child<T>, b: Child<T>) -> Self {
        let measure = a.measure() + b.measure();
        Node { measure, children: Children::Two(a, b) }
    }

    pub(crate) fn three(a: Child<T>, b: Child<T>, c: Child<T>) -> Self {
        let measure = a.measure() + b.measure() + c.measure();
        Node { measure, children: Children::Three(a, b, c) }
    }

    pub(crate) fn measure(&self) -> usize {
        self.measure
    }

    pub(crate) fn len(&self) -> usize {
        match &self.children {
            Children::Two(..) => 2,
            Children::Three(..) => 3,
        }
    }

    /// Exposes this node's children as a digit of the same size, the way
    /// a digit's worth of values. Used to refill an exhausted digit
    /// (end removal) and to recurse one level deeper (split).
    pub(crate) fn to_digit(&self) -> Digit<T> {
        match &self.children {
            Children::Two(a, b) => Digit::Two(a.clone(), b.clone()),
            Children::Three(a, b, c) => Digit::Three(a.clone(), b.clone(), c.clone()),
        }
    }

    pub(crate) fn children(&self) -> &Children<T> {
        &self.children
    }
}

// Hand-written to avoid a spurious `T: Debug` bound: prints the node's
// shape (2 or 3 children, each printed by their own shape), not values.
impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.children {
            Children::Two(a, b) => f.debug_tuple("Node").field(a).field(b).finish(),
            Children::Three(a, b, c) => f.debug_tuple("Node").field(a).field(b).field(c).finish(),
        }
    }
}

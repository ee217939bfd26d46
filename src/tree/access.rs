//! Indexed access and update:
//! descend using the cached measures to choose left digit, spine, or right
//! digit, subtracting measures as it goes, until a leaf is reached.

use std::sync::Arc;

use crate::child::Child;
use crate::digit::Digit;
use crate::node::{Children, Node};

use super::Tree;

fn find_in_digit<T>(digit: &Digit<T>, i: usize) -> (&Child<T>, usize) {
    let mut remaining = i;
    for child in digit.iter() {
        let m = child.measure();
        if remaining < m {
            return (child, remaining);
        }
        remaining -= m;
    }
    unreachable!("index out of range within digit")
}

fn find_in_node<T>(node: &Node<T>, i: usize) -> (&Child<T>, usize) {
    match node.children() {
        Children::Two(a, b) => {
            let am = a.measure();
            if i < am {
                (a, i)
            } else {
                (b, i - am)
            }
        }
        Children::Three(a, b, c) => {
            let am = a.measure();
            if i < am {
                return (a, i);
            }
            let bm = b.measure();
            if i - am < bm {
                return (b, i - am);
            }
            (c, i - am - bm)
        }
    }
}

fn get_child<T>(child: &Child<T>, i: usize) -> &T {
    match child {
        Child::Leaf(v) => {
            debug_assert_eq!(i, 0, "leaf reached with a nonzero remaining offset");
            v
        }
        Child::Node(node) => {
            let (c, j) = find_in_node(node, i);
            get_child(c, j)
        }
    }
}

/// Retrieves the leaf at leaf-offset `i`. The caller must have already
/// checked `i < tree.measure()`.
pub(crate) fn get<T>(tree: &Tree<T>, i: usize) -> &T {
    match tree {
        Tree::Empty => unreachable!("get called on an empty tree"),
        Tree::Single(x) => get_child(x, i),
        Tree::Deep { left, spine, right, .. } => {
            let lm = left.measure();
            if i < lm {
                let (c, j) = find_in_digit(left, i);
                get_child(c, j)
            } else if i < lm + spine.measure() {
                get(spine, i - lm)
            } else {
                let (c, j) = find_in_digit(right, i - lm - spine.measure());
                get_child(c, j)
            }
        }
    }
}

fn rebuild_child<T>(child: &Child<T>, i: usize, new_value: Arc<T>) -> Child<T> {
    match child {
        Child::Leaf(_) => {
            debug_assert_eq!(i, 0, "leaf reached with a nonzero remaining offset");
            Child::Leaf(new_value)
        }
        Child::Node(node) => Child::Node(Arc::new(rebuild_node(node, i, new_value))),
    }
}

fn rebuild_node<T>(node: &Node<T>, i: usize, new_value: Arc<T>) -> Node<T> {
    match node.children() {
        Children::Two(a, b) => {
            let am = a.measure();
            if i < am {
                Node::two(rebuild_child(a, i, new_value), b.clone())
            } else {
                Node::two(a.clone(), rebuild_child(b, i - am, new_value))
            }
        }
        Children::Three(a, b, c) => {
            let am = a.measure();
            if i < am {
                return Node::three(rebuild_child(a, i, new_value), b.clone(), c.clone());
            }
            let bm = b.measure();
            if i - am < bm {
                return Node::three(a.clone(), rebuild_child(b, i - am, new_value), c.clone());
            }
            Node::three(a.clone(), b.clone(), rebuild_child(c, i - am - bm, new_value))
        }
    }
}

fn rebuild_digit<T>(digit: &Digit<T>, i: usize, new_value: Arc<T>) -> Digit<T> {
    let mut remaining = i;
    let mut pos = 0;
    for child in digit.iter() {
        let m = child.measure();
        if remaining < m {
            break;
        }
        remaining -= m;
        pos += 1;
    }
    let mut children: Vec<Child<T>> = digit.iter().cloned().collect();
    children[pos] = rebuild_child(&children[pos], remaining, new_value);
    Digit::from_children(children)
}

/// Replaces the leaf at leaf-offset `i`, returning a new tree that shares
/// every untouched sibling with the original. The caller must have already
/// checked `i < tree.measure()`.
pub(crate) fn set<T>(tree: &Tree<T>, i: usize, new_value: Arc<T>) -> Tree<T> {
    match tree {
        Tree::Empty => unreachable!("set called on an empty tree"),
        Tree::Single(x) => Tree::Single(rebuild_child(x, i, new_value)),
        Tree::Deep { measure, left, spine, right } => {
            let lm = left.measure();
            if i < lm {
                Tree::Deep {
                    measure: *measure,
                    left: rebuild_digit(left, i, new_value),
                    spine: spine.clone(),
                    right: right.clone(),
                }
            } else if i < lm + spine.measure() {
                Tree::Deep {
                    measure: *measure,
                    left: left.clone(),
                    spine: Arc::new(set(spine, i - lm, new_value)),
                    right: right.clone(),
                }
            } else {
                Tree::Deep {
                    measure: *measure,
                    left: left.clone(),
                    spine: spine.clone(),
                    right: rebuild_digit(right, i - lm - spine.measure(), new_value),
                }
            }
        }
    }
}

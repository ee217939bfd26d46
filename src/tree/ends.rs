//! cons / snoc / uncons / unsnoc: amortized O(1) insertion and removal at
//! either end.

use std::sync::Arc;

use crate::child::Child;
use crate::digit::Digit;
use crate::node::Node;

use super::{unshare, Tree};

/// Pushes a child onto the front of the tree. When the left digit is already
/// full, its three oldest children are grouped into a node and pushed into
/// the spine, so the cost cascades only as far as the first non-full digit.
pub(crate) fn push_front<T>(tree: Tree<T>, x: Child<T>) -> Tree<T> {
    match tree {
        Tree::Empty => Tree::Single(x),
        Tree::Single(y) => Tree::deep(Digit::single(x), Tree::Empty, Digit::single(y)),
        Tree::Deep { measure, left, spine, right } => {
            let x_measure = x.measure();
            match left.push_front(x) {
                Ok(new_left) => Tree::Deep { measure: measure + x_measure, left: new_left, spine, right },
                Err((Digit::Four(a, b, c, d), x)) => {
                    let node = Child::Node(Arc::new(Node::three(b, c, d)));
                    let new_spine = push_front(unshare(spine), node);
                    Tree::Deep { measure: measure + x_measure, left: Digit::Two(x, a), spine: Arc::new(new_spine), right }
                }
                Err(_) => unreachable!("Digit::push_front only overflows a Four"),
            }
        }
    }
}

/// The mirror image of [`push_front`].
pub(crate) fn push_back<T>(tree: Tree<T>, x: Child<T>) -> Tree<T> {
    match tree {
        Tree::Empty => Tree::Single(x),
        Tree::Single(y) => Tree::deep(Digit::single(y), Tree::Empty, Digit::single(x)),
        Tree::Deep { measure, left, spine, right } => {
            let x_measure = x.measure();
            match right.push_back(x) {
                Ok(new_right) => Tree::Deep { measure: measure + x_measure, left, spine, right: new_right },
                Err((Digit::Four(a, b, c, d), x)) => {
                    let node = Child::Node(Arc::new(Node::three(a, b, c)));
                    let new_spine = push_back(unshare(spine), node);
                    Tree::Deep { measure: measure + x_measure, left, spine: Arc::new(new_spine), right: Digit::Two(d, x) }
                }
                Err(_) => unreachable!("Digit::push_back only overflows a Four"),
            }
        }
    }
}

/// The classic "viewL": removes and returns the front child, along with the
/// tree that remains. `None` if the tree was empty.
pub(crate) fn view_left<T>(tree: Tree<T>) -> Option<(Child<T>, Tree<T>)> {
    match tree {
        Tree::Empty => None,
        Tree::Single(x) => Some((x, Tree::Empty)),
        Tree::Deep { measure, left, spine, right } => {
            let (x, rest) = left.pop_front();
            let x_measure = x.measure();
            let new_tree = match rest {
                // Common case: the digit still has children, so the spine
                // and right digit are untouched and their `Arc` is reused.
                Some(d) => Tree::Deep { measure: measure - x_measure, left: d, spine, right },
                // The left digit just ran dry: borrow a node off the spine,
                // or collapse, via the `deepL` smart constructor.
                None => Tree::deep_l(None, unshare(spine), right),
            };
            Some((x, new_tree))
        }
    }
}

/// The mirror image of [`view_left`] ("viewR").
pub(crate) fn view_right<T>(tree: Tree<T>) -> Option<(Child<T>, Tree<T>)> {
    match tree {
        Tree::Empty => None,
        Tree::Single(x) => Some((x, Tree::Empty)),
        Tree::Deep { measure, left, spine, right } => {
            let (x, rest) = right.pop_back();
            let x_measure = x.measure();
            let new_tree = match rest {
                Some(d) => Tree::Deep { measure: measure - x_measure, left, spine, right: d },
                None => Tree::deep_r(left, unshare(spine), None),
            };
            Some((x, new_tree))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(n: i32) -> Child<i32> {
        Child::leaf(n)
    }

    #[test]
    fn push_front_onto_empty_then_single() {
        let t = push_front(Tree::Empty, leaf(1));
        let t = push_front(t, leaf(2));
        assert_eq!(t.measure(), 2);
    }

    #[test]
    fn push_front_overflows_left_digit_into_the_spine() {
        let mut t = Tree::Empty;
        for i in 0..10 {
            t = push_front(t, leaf(i));
        }
        assert_eq!(t.measure(), 10);
    }

    #[test]
    fn view_left_uncons_then_reassembles() {
        let mut t = Tree::Empty;
        for i in 0..5 {
            t = push_back(t, leaf(i));
        }
        let (first, rest) = view_left(t).unwrap();
        assert_eq!(*first.as_leaf().as_ref(), 0);
        assert_eq!(rest.measure(), 4);
    }

    #[test]
    fn view_left_on_empty_is_none() {
        let t: Tree<i32> = Tree::Empty;
        assert!(view_left(t).is_none());
    }

    #[test]
    fn view_right_unsnocs_the_last_pushed_element() {
        let mut t = Tree::Empty;
        for i in 0..5 {
            t = push_back(t, leaf(i));
        }
        let (last, rest) = view_right(t).unwrap();
        assert_eq!(*last.as_leaf().as_ref(), 4);
        assert_eq!(rest.measure(), 4);
    }
}

//! Concatenation: the classic `app3`, which
//! threads the boundary digits between the two trees through as an extra
//! "middle" list, regrouped into nodes one level up, and recurses on the two
//! spines. Every sub-tree untouched by the boundary is reused by `Arc` clone.

use std::sync::Arc;

use crate::child::Child;
use crate::node::Node;

use super::{ends, unshare, Tree};

/// Greedily forms nodes of
/// size 3, falling back to one or two nodes of size 2 at the very end so
/// that no node of size 1 (or zero) is ever produced. Reproduces the table
/// for every `k` from 2 to 8 and generalizes safely to the larger `k` that a
/// deeply recursive `app3` can in principle produce.
fn group_sizes(k: usize) -> Vec<usize> {
    match k % 3 {
        0 => vec![3; k / 3],
        1 => {
            let mut sizes = vec![3; (k - 4) / 3];
            sizes.push(2);
            sizes.push(2);
            sizes
        }
        _ => {
            let mut sizes = vec![3; (k - 2) / 3];
            sizes.push(2);
            sizes
        }
    }
}

fn regroup<T>(children: Vec<Child<T>>) -> Vec<Child<T>> {
    let sizes = group_sizes(children.len());
    let mut iter = children.into_iter();
    sizes
        .into_iter()
        .map(|size| {
            let a = iter.next().expect("group_sizes undercounted");
            let b = iter.next().expect("group_sizes undercounted");
            let node = if size == 2 {
                Node::two(a, b)
            } else {
                let c = iter.next().expect("group_sizes undercounted");
                Node::three(a, b, c)
            };
            Child::Node(Arc::new(node))
        })
        .collect()
}

fn prepend_all<T>(ts: Vec<Child<T>>, t: Tree<T>) -> Tree<T> {
    ts.into_iter().rev().fold(t, |acc, x| ends::push_front(acc, x))
}

fn append_all<T>(t: Tree<T>, ts: Vec<Child<T>>) -> Tree<T> {
    ts.into_iter().fold(t, |acc, x| ends::push_back(acc, x))
}

fn app3<T>(t1: Tree<T>, ts: Vec<Child<T>>, t2: Tree<T>) -> Tree<T> {
    match (t1, t2) {
        (Tree::Empty, t2) => prepend_all(ts, t2),
        (t1, Tree::Empty) => append_all(t1, ts),
        (Tree::Single(x), t2) => ends::push_front(prepend_all(ts, t2), x),
        (t1, Tree::Single(x)) => ends::push_back(append_all(t1, ts), x),
        (
            Tree::Deep { left: l1, spine: m1, right: r1, .. },
            Tree::Deep { left: l2, spine: m2, right: r2, .. },
        ) => {
            let mut mid = r1.into_children();
            mid.extend(ts);
            mid.extend(l2.into_children());
            let mid = regroup(mid);
            let new_spine = app3(unshare(m1), mid, unshare(m2));
            Tree::deep(l1, new_spine, r2)
        }
    }
}

/// Joins two trees in `O(log(min(m, n)))` time, where `m` and `n` are their
/// sizes; only the spine of the shorter tree is walked.
pub(crate) fn concat<T>(t1: Tree<T>, t2: Tree<T>) -> Tree<T> {
    app3(t1, Vec::new(), t2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ends;

    fn build(n: i32) -> Tree<i32> {
        (0..n).fold(Tree::Empty, |acc, x| ends::push_back(acc, Child::leaf(x)))
    }

    fn to_vec(tree: Tree<i32>) -> Vec<i32> {
        let mut out = Vec::new();
        let mut rest = tree;
        while let Some((x, next)) = ends::view_left(rest) {
            out.push(*x.into_leaf());
            rest = next;
        }
        out
    }

    #[test]
    fn group_sizes_never_produces_a_node_of_size_one() {
        for k in 2..=20 {
            let sizes = group_sizes(k);
            assert!(sizes.iter().all(|&s| s == 2 || s == 3));
            assert_eq!(sizes.iter().sum::<usize>(), k);
        }
    }

    #[test]
    fn concat_preserves_element_order() {
        for (m, n) in [(0, 0), (0, 5), (5, 0), (1, 1), (10, 10), (37, 2)] {
            let a = build(m);
            let b = (0..n).fold(Tree::Empty, |acc, x| ends::push_back(acc, Child::leaf(m + x)));
            let joined = concat(a, b);
            assert_eq!(to_vec(joined), (0..m + n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn concat_with_empty_is_identity() {
        let a = build(15);
        assert_eq!(to_vec(concat(a, Tree::Empty)), (0..15).collect::<Vec<_>>());
        let a = build(15);
        assert_eq!(to_vec(concat(Tree::Empty, a)), (0..15).collect::<Vec<_>>());
    }
}

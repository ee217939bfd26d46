//! Split-at-index: the classic `splitTree`, descending
//! through the left digit, the spine, or the right digit depending on which
//! one's cumulative measure straddles the target offset, then recombining the
//! two halves with [`Tree::deep_l`]/[`Tree::deep_r`] so structural sharing of
//! untouched digits and sub-trees is preserved.

use crate::child::Child;
use crate::digit::Digit;

use super::Tree;

fn digit_from_children<T>(children: Vec<Child<T>>) -> Option<Digit<T>> {
    if children.is_empty() {
        None
    } else {
        Some(Digit::from_children(children))
    }
}

fn tree_from_children<T>(children: Vec<Child<T>>) -> Tree<T> {
    children.into_iter().fold(Tree::Empty, |acc, x| super::ends::push_back(acc, x))
}

/// Splits a nonempty tree at leaf-offset `i` (`0 <= i < tree.measure()`)
/// into the leaves strictly before `i`, the leaf at `i`, and the leaves
/// strictly after it.
pub(crate) fn split_tree<T>(tree: Tree<T>, i: usize) -> (Tree<T>, Child<T>, Tree<T>) {
    match tree {
        Tree::Empty => unreachable!("split_tree called on an empty tree"),
        Tree::Single(x) => (Tree::Empty, x, Tree::Empty),
        Tree::Deep { left, spine, right, .. } => {
            let lm = left.measure();
            if i < lm {
                let (ls, x, rs) = left.split_at(i);
                let lt = tree_from_children(ls);
                let rt = Tree::deep_l(digit_from_children(rs), super::unshare(spine), right);
                (lt, x, rt)
            } else if i < lm + spine.measure() {
                let spine = super::unshare(spine);
                let spine_offset = i - lm;
                let (spine_l, node, spine_r) = split_tree(spine, spine_offset);
                let node_offset = spine_offset - spine_l.measure();
                let node = node.into_node();
                let (ns_l, x, ns_r) = node.to_digit().split_at(node_offset);
                let lt = Tree::deep_r(left, spine_l, digit_from_children(ns_l));
                let rt = Tree::deep_l(digit_from_children(ns_r), spine_r, right);
                (lt, x, rt)
            } else {
                let offset = i - lm - spine.measure();
                let (rs, x, rs_r) = right.split_at(offset);
                let lt = Tree::deep_r(left, super::unshare(spine), digit_from_children(rs));
                let rt = tree_from_children(rs_r);
                (lt, x, rt)
            }
        }
    }
}

/// Top-level split over the inclusive `[0, count]` range: at `i == 0` or
/// `i == tree.measure()` there is no straddling leaf to find, so those are
/// handled directly without descending.
pub(crate) fn split<T>(tree: Tree<T>, i: usize) -> (Tree<T>, Tree<T>) {
    let total = tree.measure();
    if i == 0 {
        (Tree::Empty, tree)
    } else if i == total {
        (tree, Tree::Empty)
    } else {
        let (l, x, r) = split_tree(tree, i);
        (l, super::ends::push_front(r, x))
    }
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
    fn split_at_every_index_partitions_correctly() {
        for n in [0, 1, 2, 3, 10, 37] {
            for i in 0..=n {
                let t = build(n);
                let (l, r) = split(t, i as usize);
                assert_eq!(to_vec(l), (0..i).collect::<Vec<_>>());
                assert_eq!(to_vec(r), (i..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn split_tree_yields_the_element_straddling_the_offset() {
        let t = build(10);
        let (_, x, _) = split_tree(t, 4);
        assert_eq!(*x.into_leaf(), 4);
    }
}

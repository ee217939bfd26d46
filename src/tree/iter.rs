//! Forward and backward traversal without
//! materializing an intermediate list: an explicit stack of pending work,
//! expanded one frame at a time as the caller asks for the next leaf.

use std::sync::Arc;

use crate::child::Child;
use crate::node::Children;

use super::Tree;

enum Frame<T> {
    Tree(Arc<Tree<T>>),
    Child(Child<T>),
}

/// Forward iterator over a tree's leaves, left to right.
pub(crate) struct Iter<T> {
    stack: Vec<Frame<T>>,
}

impl<T> Iter<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        Iter { stack: vec![Frame::Tree(Arc::new(tree))] }
    }
}

impl<T> Iterator for Iter<T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Tree(tree) => match &*tree {
                    Tree::Empty => {}
                    Tree::Single(x) => self.stack.push(Frame::Child(x.clone())),
                    Tree::Deep { left, spine, right, .. } => {
                        // Pushed in reverse visiting order: the stack pops
                        // left-digit children first, then the spine, then
                        // the right digit.
                        for x in right.iter().rev() {
                            self.stack.push(Frame::Child(x.clone()));
                        }
                        self.stack.push(Frame::Tree(spine.clone()));
                        for x in left.iter().rev() {
                            self.stack.push(Frame::Child(x.clone()));
                        }
                    }
                },
                Frame::Child(child) => match child {
                    Child::Leaf(v) => return Some(v),
                    Child::Node(node) => match node.children() {
                        Children::Two(a, b) => {
                            self.stack.push(Frame::Child(b.clone()));
                            self.stack.push(Frame::Child(a.clone()));
                        }
                        Children::Three(a, b, c) => {
                            self.stack.push(Frame::Child(c.clone()));
                            self.stack.push(Frame::Child(b.clone()));
                            self.stack.push(Frame::Child(a.clone()));
                        }
                    },
                },
            }
        }
    }
}


/// Backward iterator over a tree's leaves, right to left: the mirror image
/// of [`Iter`], pushing frames in the opposite order.
pub(crate) struct IterBack<T> {
    stack: Vec<Frame<T>>,
}

impl<T> IterBack<T> {
    pub(crate) fn new(tree: Tree<T>) -> Self {
        IterBack { stack: vec![Frame::Tree(Arc::new(tree))] }
    }
}

impl<T> Iterator for IterBack<T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Tree(tree) => match &*tree {
                    Tree::Empty => {}
                    Tree::Single(x) => self.stack.push(Frame::Child(x.clone())),
                    Tree::Deep { left, spine, right, .. } => {
                        for x in left.iter() {
                            self.stack.push(Frame::Child(x.clone()));
                        }
                        self.stack.push(Frame::Tree(spine.clone()));
                        for x in right.iter() {
                            self.stack.push(Frame::Child(x.clone()));
                        }
                    }
                },
                Frame::Child(child) => match child {
                    Child::Leaf(v) => return Some(v),
                    Child::Node(node) => match node.children() {
                        Children::Two(a, b) => {
                            self.stack.push(Frame::Child(a.clone()));
                            self.stack.push(Frame::Child(b.clone()));
                        }
                        Children::Three(a, b, c) => {
                            self.stack.push(Frame::Child(a.clone()));
                            self.stack.push(Frame::Child(b.clone()));
                            self.stack.push(Frame::Child(c.clone()));
                        }
                    },
                },
            }
        }
    }
}

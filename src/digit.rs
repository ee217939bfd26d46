//! The 1-4 element buffer at each finger of a tree level.
//!
//! Digits are the unit of end-manipulation: pushing past four children always
//! overflows (caught by [`Digit::push_front`]/[`Digit::push_back`] returning
//! the rejected value rather than silently growing), and popping the last
//! child always empties the digit down to nothing rather than to a
//! zero-sized variant: empty digits simply don't exist as a value.

use std::fmt;

use crate::child::Child;

pub(crate) enum Digit<T> {
    One(Child<T>),
    Two(Child<T>, Child<T>),
    Three(Child<T>, Child<T>, Child<T>),
    Four(Child<T>, Child<T>, Child<T>, Child<T>),
}

impl<T> Digit<T> {
    pub(crate) fn single(x: Child<T>) -> Self {
        Digit::One(x)
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Digit::One(..) => 1,
            Digit::Two(..) => 2,
            Digit::Three(..) => 3,
            Digit::Four(..) => 4,
        }
    }

    pub(crate) fn measure(&self) -> usize {
        self.iter().map(Child::measure).sum()
    }

    pub(crate) fn first(&self) -> &Child<T> {
        match self {
            Digit::One(a) | Digit::Two(a, _) | Digit::Three(a, _, _) | Digit::Four(a, _, _, _) => a,
        }
    }

    pub(crate) fn last(&self) -> &Child<T> {
        match self {
            Digit::One(a) => a,
            Digit::Two(_, b) => b,
            Digit::Three(_, _, c) => c,
            Digit::Four(_, _, _, d) => d,
        }
    }

    pub(crate) fn iter(&self) -> impl DoubleEndedIterator<Item = &Child<T>> {
        let slice: Vec<&Child<T>> = match self {
            Digit::One(a) => vec![a],
            Digit::Two(a, b) => vec![a, b],
            Digit::Three(a, b, c) => vec![a, b, c],
            Digit::Four(a, b, c, d) => vec![a, b, c, d],
        };
        slice.into_iter()
    }

    pub(crate) fn into_children(self) -> Vec<Child<T>> {
        match self {
            Digit::One(a) => vec![a],
            Digit::Two(a, b) => vec![a, b],
            Digit::Three(a, b, c) => vec![a, b, c],
            Digit::Four(a, b, c, d) => vec![a, b, c, d],
        }
    }

    /// Builds a digit back from 1 to 4 children. Panics if given any other
    /// count; every call site is expected to have already established the
    /// count is in range.
    pub(crate) fn from_children(mut children: Vec<Child<T>>) -> Self {
        match children.len() {
            1 => Digit::One(children.remove(0)),
            2 => {
                let b = children.remove(1);
                let a = children.remove(0);
                Digit::Two(a, b)
            }
            3 => {
                let c = children.remove(2);
                let b = children.remove(1);
                let a = children.remove(0);
                Digit::Three(a, b, c)
            }
            4 => {
                let d = children.remove(3);
                let c = children.remove(2);
                let b = children.remove(1);
                let a = children.remove(0);
                Digit::Four(a, b, c, d)
            }
            n => unreachable!("a digit must have between 1 and 4 children, got {n}"),
        }
    }

    /// Prepends a child. Fails, returning the unmodified digit alongside the
    /// rejected child, if this digit already holds four children.
    pub(crate) fn push_front(self, x: Child<T>) -> Result<Digit<T>, (Digit<T>, Child<T>)> {
        match self {
            Digit::One(a) => Ok(Digit::Two(x, a)),
            Digit::Two(a, b) => Ok(Digit::Three(x, a, b)),
            Digit::Three(a, b, c) => Ok(Digit::Four(x, a, b, c)),
            four @ Digit::Four(..) => Err((four, x)),
        }
    }

    /// Appends a child. Same overflow behavior as [`Digit::push_front`].
    pub(crate) fn push_back(self, x: Child<T>) -> Result<Digit<T>, (Digit<T>, Child<T>)> {
        match self {
            Digit::One(a) => Ok(Digit::Two(a, x)),
            Digit::Two(a, b) => Ok(Digit::Three(a, b, x)),
            Digit::Three(a, b, c) => Ok(Digit::Four(a, b, c, x)),
            four @ Digit::Four(..) => Err((four, x)),
        }
    }

    /// Removes the first child. Returns `None` for the remaining digit when
    /// this was the last child in it: a digit of size zero doesn't exist as
    /// a value, so the caller (always `tree`'s view/deepL machinery) must
    /// handle refilling from the spine or collapsing.
    pub(crate) fn pop_front(self) -> (Child<T>, Option<Digit<T>>) {
        match self {
            Digit::One(a) => (a, None),
            Digit::Two(a, b) => (a, Some(Digit::One(b))),
            Digit::Three(a, b, c) => (a, Some(Digit::Two(b, c))),
            Digit::Four(a, b, c, d) => (a, Some(Digit::Three(b, c, d))),
        }
    }

    pub(crate) fn pop_back(self) -> (Child<T>, Option<Digit<T>>) {
        match self {
            Digit::One(a) => (a, None),
            Digit::Two(a, b) => (b, Some(Digit::One(a))),
            Digit::Three(a, b, c) => (c, Some(Digit::Two(a, b))),
            Digit::Four(a, b, c, d) => (d, Some(Digit::Three(a, b, c))),
        }
    }

    /// Splits this digit at leaf-offset `i` (`0 <= i < self.measure()`):
    /// the children strictly before the one containing `i`, the child that
    /// contains `i`, and the children strictly after it.
    pub(crate) fn split_at(self, i: usize) -> (Vec<Child<T>>, Child<T>, Vec<Child<T>>) {
        let mut left = Vec::with_capacity(3);
        let mut remaining = i;
        let mut children = self.into_children().into_iter();
        for child in &mut children {
            let m = child.measure();
            if remaining < m {
                let right: Vec<Child<T>> = children.collect();
                return (left, child, right);
            }
            remaining -= m;
            left.push(child);
        }
        unreachable!("split_at index out of range for this digit")
    }
}

impl<T> Clone for Digit<T> {
    fn clone(&self) -> Self {
        match self {
            Digit::One(a) => Digit::One(a.clone()),
            Digit::Two(a, b) => Digit::Two(a.clone(), b.clone()),
            Digit::Three(a, b, c) => Digit::Three(a.clone(), b.clone(), c.clone()),
            Digit::Four(a, b, c, d) => Digit::Four(a.clone(), b.clone(), c.clone(), d.clone()),
        }
    }
}

// Hand-written to avoid a spurious `T: Debug` bound: prints each child's
// shape, not the leaf values.
impl<T> fmt::Debug for Digit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("Digit");
        for child in self.iter() {
            t.field(child);
        }
        t.finish()
    }
}

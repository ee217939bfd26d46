//! The public façade: a thin wrapper around one [`Tree`]
//! exposing every sequence-level operation. Every method takes `&self` and
//! returns a new [`Sequence`] (or a pure query result); cloning a tree is a
//! handful of `Arc` bumps, so there is no benefit to a mutating API, and a
//! shared-by-value API keeps old versions valid after every derived operation
//! requirement exactly.

use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use crate::child::Child;
use crate::error::{check_bound, normalize_index, normalize_insert_index, SeqError};
use crate::tree::{access, concat as concat_mod, ends, iter as tree_iter, split, Tree};

/// A persistent, immutable sequence backed by a 2-3 finger tree.
///
/// Cloning a `Sequence` is `O(1)`: it bumps a handful of `Arc` reference
/// counts rather than copying any element.
pub struct Sequence<T> {
    tree: Tree<T>,
}

impl<T> Sequence<T> {
    /// The canonical empty sequence.
    pub fn empty() -> Self {
        Sequence { tree: Tree::Empty }
    }

    /// The number of elements. `O(1)`.
    pub fn count(&self) -> usize {
        self.tree.measure()
    }

    /// True iff [`Sequence::count`] is zero.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The leftmost element.
    pub fn first(&self) -> Result<&T, SeqError> {
        match &self.tree {
            Tree::Empty => Err(SeqError::Empty),
            Tree::Single(x) => Ok(leaf_ref(x)),
            Tree::Deep { left, .. } => Ok(leaf_ref(left.first())),
        }
    }

    /// The rightmost element.
    pub fn last(&self) -> Result<&T, SeqError> {
        match &self.tree {
            Tree::Empty => Err(SeqError::Empty),
            Tree::Single(x) => Ok(leaf_ref(x)),
            Tree::Deep { right, .. } => Ok(leaf_ref(right.last())),
        }
    }

    /// Inserts `x` at the front.
    pub fn add_first(&self, x: T) -> Self {
        Sequence { tree: ends::push_front(self.tree.clone(), Child::leaf(x)) }
    }

    /// Inserts `x` at the back.
    pub fn add_last(&self, x: T) -> Self {
        Sequence { tree: ends::push_back(self.tree.clone(), Child::leaf(x)) }
    }

    /// Removes the leftmost element.
    pub fn drop_first(&self) -> Result<Self, SeqError> {
        match ends::view_left(self.tree.clone()) {
            Some((_, rest)) => Ok(Sequence { tree: rest }),
            None => Err(SeqError::Empty),
        }
    }

    /// Removes the rightmost element.
    pub fn drop_last(&self) -> Result<Self, SeqError> {
        match ends::view_right(self.tree.clone()) {
            Some((_, rest)) => Ok(Sequence { tree: rest }),
            None => Err(SeqError::Empty),
        }
    }

    /// Indexed access. Negative `i` counts from the end (`i + count`).
    pub fn get(&self, i: i64) -> Result<&T, SeqError> {
        let idx = normalize_index(i, self.count())?;
        Ok(access::get(&self.tree, idx))
    }

    /// Replaces the element at `i`, preserving [`Sequence::count`].
    pub fn set(&self, i: i64, x: T) -> Result<Self, SeqError> {
        let idx = normalize_index(i, self.count())?;
        Ok(Sequence { tree: access::set(&self.tree, idx, Arc::new(x)) })
    }

    /// Inserts `x` before position `i`. `i == count` is equivalent to
    /// [`Sequence::add_last`].
    pub fn insert(&self, i: i64, x: T) -> Result<Self, SeqError> {
        let idx = normalize_insert_index(i, self.count())?;
        let (l, r) = split::split(self.tree.clone(), idx);
        let r = ends::push_front(r, Child::leaf(x));
        Ok(Sequence { tree: concat_mod::concat(l, r) })
    }

    /// Removes the element at `i`.
    pub fn remove(&self, i: i64) -> Result<Self, SeqError> {
        let idx = normalize_index(i, self.count())?;
        let (l, r) = split::split(self.tree.clone(), idx);
        let (_, r) = ends::view_left(r).expect("idx < count guarantees a straddling element");
        Ok(Sequence { tree: concat_mod::concat(l, r) })
    }

    /// Inserts every element of `xs`, in order, before position `i`.
    pub fn insert_range<I>(&self, i: i64, xs: I) -> Result<Self, SeqError>
    where
        I: IntoIterator<Item = T>,
    {
        let idx = normalize_insert_index(i, self.count())?;
        let (l, r) = split::split(self.tree.clone(), idx);
        let middle: Sequence<T> = xs.into_iter().collect();
        Ok(Sequence { tree: concat_mod::concat(concat_mod::concat(l, middle.tree), r) })
    }

    /// Prepends every element of `xs`, in order, iterating `xs` exactly once.
    pub fn add_first_range<I>(&self, xs: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let prefix: Sequence<T> = xs.into_iter().collect();
        Sequence { tree: concat_mod::concat(prefix.tree, self.tree.clone()) }
    }

    /// Appends every element of `xs`, in order, iterating `xs` exactly once.
    pub fn add_last_range<I>(&self, xs: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let suffix: Sequence<T> = xs.into_iter().collect();
        Sequence { tree: concat_mod::concat(self.tree.clone(), suffix.tree) }
    }

    /// Concatenates `self` followed by `other` in amortized
    /// `O(log(min(count(self), count(other))))`.
    pub fn concat(&self, other: &Self) -> Self {
        Sequence { tree: concat_mod::concat(self.tree.clone(), other.tree.clone()) }
    }

    /// Splits into the first `i` elements and the rest.
    pub fn split_at(&self, i: usize) -> Result<(Self, Self), SeqError> {
        let idx = check_bound(i, self.count())?;
        let (l, r) = split::split(self.tree.clone(), idx);
        Ok((Sequence { tree: l }, Sequence { tree: r }))
    }

    /// The inclusive sub-range `[start, end]`. Negative indices count from
    /// the end (`-1` is the last element).
    pub fn slice(&self, start: i64, end: i64) -> Result<Self, SeqError> {
        let count = self.count();
        let start_idx = normalize_index(start, count)?;
        let end_idx = normalize_index(end, count)?;
        if end_idx < start_idx {
            return Ok(Sequence::empty());
        }
        let (_, rest) = split::split(self.tree.clone(), start_idx);
        let (middle, _) = split::split(rest, end_idx - start_idx + 1);
        Ok(Sequence { tree: middle })
    }

    /// The first `n` elements. `n` must be in `[0, count]`.
    pub fn take(&self, n: usize) -> Result<Self, SeqError> {
        let (l, _) = split::split(self.tree.clone(), check_bound(n, self.count())?);
        Ok(Sequence { tree: l })
    }

    /// Every element after the first `n`. `n` must be in `[0, count]`.
    pub fn skip(&self, n: usize) -> Result<Self, SeqError> {
        let (_, r) = split::split(self.tree.clone(), check_bound(n, self.count())?);
        Ok(Sequence { tree: r })
    }

    /// Element order reversed. `O(n)`.
    pub fn reverse(&self) -> Self
    where
        T: Clone,
    {
        self.iter_back().map(|x| (*x).clone()).collect()
    }

    /// Element-wise transform. Preserves [`Sequence::count`].
    pub fn map<U, F>(&self, mut f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(|x| f(&x)).collect()
    }

    /// Concatenation of the sub-sequences `f` produces for each element.
    pub fn flat_map<U, F>(&self, mut f: F) -> Sequence<U>
    where
        F: FnMut(&T) -> Sequence<U>,
    {
        self.iter().fold(Sequence::empty(), |acc, x| acc.concat(&f(&x)))
    }

    /// Retains only the elements satisfying `p`.
    pub fn filter<F>(&self, mut p: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|x| p(x)).map(|x| (*x).clone()).collect()
    }

    /// Left fold.
    pub fn fold<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter().fold(init, |acc, x| f(acc, &x))
    }

    /// Right fold.
    pub fn fold_back<B, F>(&self, init: B, mut f: F) -> B
    where
        F: FnMut(B, &T) -> B,
    {
        self.iter_back().fold(init, |acc, x| f(acc, &x))
    }

    /// True iff every element satisfies `p`; short-circuits on the first
    /// failure.
    pub fn all<F>(&self, mut p: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|x| p(&x))
    }

    /// True iff some element satisfies `p`; short-circuits on the first
    /// success.
    pub fn any<F>(&self, mut p: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|x| p(&x))
    }

    /// The index of the first element satisfying `p`, or `None`.
    pub fn index_of<F>(&self, mut p: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(|x| p(&x))
    }

    /// Forward traversal without materializing an intermediate list.
    pub fn iterate<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for x in self.iter() {
            visitor(&x);
        }
    }

    /// Backward traversal without materializing an intermediate list.
    pub fn iterate_back<F>(&self, mut visitor: F)
    where
        F: FnMut(&T),
    {
        for x in self.iter_back() {
            visitor(&x);
        }
    }

    /// Forward traversal that halts as soon as `pred` returns `false`.
    pub fn iterate_while<F>(&self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        for x in self.iter() {
            if !pred(&x) {
                break;
            }
        }
    }

    /// Backward traversal that halts as soon as `pred` returns `false`.
    pub fn iterate_back_while<F>(&self, mut pred: F)
    where
        F: FnMut(&T) -> bool,
    {
        for x in self.iter_back() {
            if !pred(&x) {
                break;
            }
        }
    }

    /// Lazy forward iterator over `Arc<T>` leaves.
    pub fn iter(&self) -> tree_iter::Iter<T> {
        tree_iter::Iter::new(self.tree.clone())
    }

    /// Lazy backward iterator over `Arc<T>` leaves.
    pub(crate) fn iter_back(&self) -> tree_iter::IterBack<T> {
        tree_iter::IterBack::new(self.tree.clone())
    }

    /// Structural equality against `other` using `eq`.
    pub fn sequence_equal_by<F>(&self, other: &Self, mut eq: F) -> bool
    where
        F: FnMut(&T, &T) -> bool,
    {
        if self.count() != other.count() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| eq(&a, &b))
    }

    /// Structural equality against `other` using `T`'s own [`PartialEq`].
    pub fn sequence_equal(&self, other: &Self) -> bool
    where
        T: PartialEq,
    {
        self.sequence_equal_by(other, |a, b| a == b)
    }

    /// Walks the whole tree asserting every structural invariant: digit and
    /// node child counts in range, and every cached measure correct. A no-op
    /// outside debug builds.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        self.tree.assert_invariants();
    }
}

fn leaf_ref<T>(child: &Child<T>) -> &T {
    match child {
        Child::Leaf(v) => v,
        Child::Node(_) => unreachable!("digit at a finger always holds leaves"),
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let tree = iter
            .into_iter()
            .fold(Tree::Empty, |acc, x| ends::push_back(acc, Child::leaf(x)));
        Sequence { tree }
    }
}

/// Owning iterator over a sequence's elements, cloning each `Arc<T>` payload
/// out by value. Used by `for x in sequence` where `Sequence<T>` is consumed.
pub struct IntoIter<T> {
    inner: tree_iter::Iter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = Arc<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = Arc<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: tree_iter::Iter::new(self.tree) }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = Arc<T>;
    type IntoIter = tree_iter::Iter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence_equal(other)
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Sequence { tree: self.tree.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(|x| DebugLeaf(x))).finish()
    }
}

// Wraps an `Arc<T>` so `Debug::fmt` prints the element, not the pointer.
struct DebugLeaf<T>(Arc<T>);

impl<T: fmt::Debug> fmt::Debug for DebugLeaf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::empty()
    }
}

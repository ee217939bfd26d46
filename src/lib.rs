//! A persistent, immutable sequence backed by a 2-3 finger tree.
//!
//! The finger tree is annotated with an additive `usize` measure (element
//! count), giving the [`Sequence`] façade `O(log n)` indexed access, insert,
//! delete, split and concatenation, and amortized `O(1)` operations at
//! either end, all while sharing structure with every other version of the
//! sequence that is still alive. Nothing in this crate ever mutates a tree
//! node in place; every operation returns a fresh [`Sequence`] sharing the
//! unchanged parts of its input.
//!
//! The tree core ([`tree`]) is built from two small, pure helper layers,
//! [`digit`] (the 1–4 child buffer at each finger) and [`node`] (the 2-or-3
//! child branch one level deeper). [`child`] erases the level-dependent
//! element type the classic finger tree needs into a single runtime
//! discriminator, since Rust has no convenient way to express a type whose
//! shape recurses into "the same structure, one level deeper".

pub mod error;

pub(crate) mod child;
pub(crate) mod digit;
pub(crate) mod node;
pub(crate) mod tree;

mod seq;

pub use error::SeqError;
pub use seq::{IntoIter, Sequence};

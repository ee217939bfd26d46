//! Shared reference-model machinery for the integration and property tests:
//! a `Vec<i32>` is kept alongside a [`Sequence<i32>`] and every operation is
//! mirrored on both, so any divergence is caught immediately.

use persistent_seq::Sequence;

/// A single round of testing: apply the same operation to a `Sequence` and
/// to a `Vec`, then assert they still agree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    AddFirst(i32),
    AddLast(i32),
    DropFirst,
    DropLast,
    Insert { index: usize, value: i32 },
    Remove { index: usize },
    Set { index: usize, value: i32 },
}

pub fn apply(seq: &Sequence<i32>, reference: &mut Vec<i32>, op: &Op) -> Sequence<i32> {
    match *op {
        Op::AddFirst(x) => {
            reference.insert(0, x);
            seq.add_first(x)
        }
        Op::AddLast(x) => {
            reference.push(x);
            seq.add_last(x)
        }
        Op::DropFirst => {
            if reference.is_empty() {
                return seq.clone();
            }
            reference.remove(0);
            seq.drop_first().expect("non-empty reference implies non-empty sequence")
        }
        Op::DropLast => {
            if reference.is_empty() {
                return seq.clone();
            }
            reference.pop();
            seq.drop_last().expect("non-empty reference implies non-empty sequence")
        }
        Op::Insert { index, value } => {
            let index = index % (reference.len() + 1);
            reference.insert(index, value);
            seq.insert(index as i64, value).expect("index modulo len + 1 is always in range")
        }
        Op::Remove { index } => {
            if reference.is_empty() {
                return seq.clone();
            }
            let index = index % reference.len();
            reference.remove(index);
            seq.remove(index as i64).expect("index modulo len is always in range")
        }
        Op::Set { index, value } => {
            if reference.is_empty() {
                return seq.clone();
            }
            let index = index % reference.len();
            reference[index] = value;
            seq.set(index as i64, value).expect("index modulo len is always in range")
        }
    }
}

pub fn to_vec(seq: &Sequence<i32>) -> Vec<i32> {
    seq.fold(Vec::with_capacity(seq.count()), |mut acc, x| {
        acc.push(*x);
        acc
    })
}

pub fn assert_consistent(seq: &Sequence<i32>, reference: &[i32]) {
    assert_eq!(seq.count(), reference.len());
    assert_eq!(to_vec(seq), reference);
    #[cfg(debug_assertions)]
    seq.assert_invariants();
}

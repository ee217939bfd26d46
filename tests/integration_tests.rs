//! Black-box tests against the public `Sequence` façade, covering the
//! core end-to-end usage scenarios: building, reversing, splitting and
//! rejoining, inserting, slicing, error conditions, and negative indices.

mod common;
use common::assert_consistent;

use persistent_seq::{SeqError, Sequence};

#[test]
fn scenario_add_last_then_reverse() {
    let seq: Sequence<i32> = (1..=10).fold(Sequence::empty(), |acc, x| acc.add_last(x));
    assert_consistent(&seq, &(1..=10).collect::<Vec<_>>());

    let reversed = seq.reverse();
    let expected: Vec<i32> = (1..=10).rev().collect();
    assert_consistent(&reversed, &expected);
}

#[test]
fn scenario_split_and_concat_round_trip() {
    let seq: Sequence<i32> = (1..=1000).collect();
    let (a, b) = seq.split_at(500).unwrap();
    assert_eq!(a.count(), 500);
    assert_eq!(b.count(), 500);

    let joined = a.concat(&b);
    assert_consistent(&joined, &(1..=1000).collect::<Vec<_>>());
}

#[test]
fn scenario_insert_in_the_middle() {
    let seq: Sequence<i32> = (1..=100).collect();
    let inserted = seq.insert(50, 999).unwrap();
    assert_eq!(inserted.count(), 101);
    assert_eq!(*inserted.get(50).unwrap(), 999);
    assert_eq!(*inserted.get(49).unwrap(), 50);
    assert_eq!(*inserted.get(51).unwrap(), 51);
}

#[test]
fn scenario_concat_then_slice_then_take_skip() {
    let a: Sequence<i32> = vec![1, 2, 3].into_iter().collect();
    let b: Sequence<i32> = vec![4, 5, 6].into_iter().collect();
    let joined = a.concat(&b);
    assert_consistent(&joined, &[1, 2, 3, 4, 5, 6]);

    let sliced = joined.slice(1, 4).unwrap();
    assert_consistent(&sliced, &[2, 3, 4, 5]);

    let taken = sliced.take(2).unwrap();
    assert_consistent(&taken, &[2, 3]);

    let skipped = sliced.skip(2).unwrap();
    assert_consistent(&skipped, &[4, 5]);
}

#[test]
fn scenario_errors_on_empty() {
    let seq: Sequence<i32> = Sequence::empty();
    assert_eq!(seq.drop_first().unwrap_err(), SeqError::Empty);
    assert_eq!(seq.drop_last().unwrap_err(), SeqError::Empty);
    assert_eq!(seq.first().unwrap_err(), SeqError::Empty);
    assert_eq!(seq.last().unwrap_err(), SeqError::Empty);
    assert!(matches!(seq.get(0).unwrap_err(), SeqError::OutOfRange { .. }));
    assert!(matches!(seq.insert(1, 0).unwrap_err(), SeqError::OutOfRange { .. }));
    assert!(seq.insert(0, 0).is_ok());
}

#[test]
fn scenario_negative_indices() {
    let seq: Sequence<i32> = (1..=10).collect();
    assert_eq!(*seq.get(-1).unwrap(), 10);
    assert_eq!(*seq.get(-10).unwrap(), 1);
    assert!(matches!(seq.get(-11).unwrap_err(), SeqError::OutOfRange { .. }));

    let updated = seq.set(-1, 99).unwrap();
    assert_eq!(*updated.last().unwrap(), 99);
    assert_eq!(updated.count(), 10);
}

#[test]
fn map_and_filter_compose() {
    let seq: Sequence<i32> = (1..=20).collect();
    let doubled = seq.map(|x| x * 2);
    assert_consistent(&doubled, &(1..=20).map(|x| x * 2).collect::<Vec<_>>());

    let evens = doubled.filter(|x| x % 4 == 0);
    let expected: Vec<i32> = (1..=20).map(|x| x * 2).filter(|x| x % 4 == 0).collect();
    assert_consistent(&evens, &expected);
}

#[test]
fn flat_map_concatenates_sub_sequences() {
    let seq: Sequence<i32> = (1..=3).collect();
    let expanded = seq.flat_map(|&x| (0..x).collect());
    assert_consistent(&expanded, &[0, 0, 1, 0, 1, 2]);
}

#[test]
fn fold_and_fold_back_are_mirror_images() {
    let seq: Sequence<i32> = (1..=5).collect();
    let forward: Vec<i32> = seq.fold(Vec::new(), |mut acc, &x| {
        acc.push(x);
        acc
    });
    let backward: Vec<i32> = seq.fold_back(Vec::new(), |mut acc, &x| {
        acc.push(x);
        acc
    });
    assert_eq!(forward, vec![1, 2, 3, 4, 5]);
    assert_eq!(backward, vec![5, 4, 3, 2, 1]);
}

#[test]
fn index_of_and_quantifiers() {
    let seq: Sequence<i32> = (1..=10).collect();
    assert_eq!(seq.index_of(|&x| x == 7), Some(6));
    assert_eq!(seq.index_of(|&x| x == 99), None);
    assert!(seq.all(|&x| x > 0));
    assert!(seq.any(|&x| x == 10));
    assert!(!seq.any(|&x| x == 11));
}

#[test]
fn sequence_equal_and_partial_eq() {
    let a: Sequence<i32> = (1..=5).collect();
    let b: Sequence<i32> = (1..=5).collect();
    let c: Sequence<i32> = (1..=6).collect();
    assert!(a.sequence_equal(&b));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn clone_is_structural_sharing() {
    let seq: Sequence<i32> = (1..=1000).collect();
    let snapshot = seq.clone();
    let extended = seq.add_last(1001);
    assert_eq!(snapshot.count(), 1000);
    assert_eq!(extended.count(), 1001);
    assert_eq!(*snapshot.last().unwrap(), 1000);
}

//! The error taxonomy for the sequence engine.
//!
//! Every fallible public operation returns [`SeqError`]. The taxonomy is closed:
//! no new public variant should be added without updating every operation's docs.

use thiserror::Error;

/// Errors that can escape the public [`crate::Sequence`] API.
///
/// `Overflow` from the design's internal digit-overflow signal never appears here:
/// it is handled entirely inside the tree core and indicates an invariant violation
/// if it is ever observed outside of it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// An end-access operation (`first`, `last`, `drop_first`, `drop_last`, ...)
    /// was invoked on a sequence with zero elements.
    #[error("operation requires a non-empty sequence")]
    Empty,

    /// An index-based operation received an index outside its documented range,
    /// after negative-index normalization.
    #[error("index {index} out of range for a sequence of length {len}")]
    OutOfRange {
        /// The index as given by the caller, after negative-index normalization.
        index: i64,
        /// The length of the sequence the index was checked against.
        len: usize,
    },

    /// A callback or input iterable required by the operation was absent.
    #[error("a required argument was missing")]
    NullArgument,
}

/// Normalizes an index for the exclusive-range accessors (`get`, `set`,
/// `slice`'s bounds): negative `i` counts from the end (`i + len`); the
/// valid range after normalization is `[0, len)`.
pub(crate) fn normalize_index(i: i64, len: usize) -> Result<usize, SeqError> {
    let normalized = if i < 0 { i + len as i64 } else { i };
    if normalized < 0 || normalized >= len as i64 {
        return Err(SeqError::OutOfRange { index: i, len });
    }
    Ok(normalized as usize)
}

/// Normalizes an index for `insert`/`insert-range`: there is one more valid
/// insertion point than there are elements (inserting at `len` appends), so
/// negative `i` counts from `len + 1` instead of `len`; the valid range
/// after normalization is `[0, len]`.
pub(crate) fn normalize_insert_index(i: i64, len: usize) -> Result<usize, SeqError> {
    let positions = len as i64 + 1;
    let normalized = if i < 0 { i + positions } else { i };
    if normalized < 0 || normalized >= positions {
        return Err(SeqError::OutOfRange { index: i, len });
    }
    Ok(normalized as usize)
}

/// Validates a plain, non-negative split/take/skip point against `[0, len]`.
pub(crate) fn check_bound(i: usize, len: usize) -> Result<usize, SeqError> {
    if i > len {
        return Err(SeqError::OutOfRange { index: i as i64, len });
    }
    Ok(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_index_shifts_negative_by_len() {
        assert_eq!(normalize_index(-1, 10).unwrap(), 9);
        assert_eq!(normalize_index(-10, 10).unwrap(), 0);
        assert!(normalize_index(-11, 10).is_err());
        assert!(normalize_index(10, 10).is_err());
        assert_eq!(normalize_index(0, 10).unwrap(), 0);
    }

    #[test]
    fn normalize_insert_index_shifts_negative_by_len_plus_one() {
        assert_eq!(normalize_insert_index(0, 0).unwrap(), 0);
        assert!(normalize_insert_index(1, 0).is_err());
        assert_eq!(normalize_insert_index(-1, 10).unwrap(), 10);
        assert_eq!(normalize_insert_index(10, 10).unwrap(), 10);
        assert!(normalize_insert_index(11, 10).is_err());
    }

    #[test]
    fn check_bound_allows_the_length_itself_but_nothing_past_it() {
        assert_eq!(check_bound(10, 10).unwrap(), 10);
        assert!(check_bound(11, 10).is_err());
    }
}

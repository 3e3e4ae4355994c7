//! Positional and index-based slicing
//!
//! The sign of a count selects the end of the sequence an operation works
//! on. For [`skip_last`] a positive count removes elements from the tail and
//! a negative count removes them from the head; [`take_last`] mirrors that.

#[cfg(feature = "alloc")]
use alloc::{collections::BTreeSet, vec::Vec};

/// Drop `|n|` elements from one end of `seq`
///
/// `n > 0` keeps the first `len - n` elements, `n < 0` keeps the last
/// `len - |n|` elements and `n == 0` keeps everything. Returns `None` when
/// `seq` is empty or `|n| >= len`.
pub fn skip_last<T>(seq: &[T], n: isize) -> Option<&[T]> {
    let count = n.unsigned_abs();
    if seq.is_empty() || count >= seq.len() {
        return None;
    }

    if n >= 0 {
        Some(&seq[..seq.len() - count])
    } else {
        Some(&seq[count..])
    }
}

/// Keep `|n|` elements from one end of `seq`
///
/// When `|n| >= len` the whole sequence comes back unchanged. Otherwise
/// `n > 0` keeps the last `n` elements, `n < 0` keeps the first `|n|`
/// elements and `n == 0` yields an empty slice.
pub fn take_last<T>(seq: &[T], n: isize) -> Option<&[T]> {
    let count = n.unsigned_abs();
    if count >= seq.len() {
        return Some(seq);
    }

    if n >= 0 {
        Some(&seq[seq.len() - count..])
    } else {
        Some(&seq[..count])
    }
}

/// Keep the elements whose position appears in `indices`
///
/// Output preserves the order of `seq`, not of `indices`. Positions past the
/// end are ignored and repeated positions select an element once.
///
/// - `indices == None` returns a copy of the whole sequence
/// - an empty `indices` list returns `None`
/// - an empty `seq` returns `None`
#[cfg(feature = "alloc")]
pub fn take_at_indices<T: Clone>(seq: &[T], indices: Option<&[usize]>) -> Option<Vec<T>> {
    if seq.is_empty() {
        return None;
    }

    let Some(indices) = indices else {
        return Some(seq.to_vec());
    };
    if indices.is_empty() {
        return None;
    }

    let wanted: BTreeSet<usize> = indices.iter().copied().collect();
    Some(
        seq.iter()
            .enumerate()
            .filter(|(i, _)| wanted.contains(i))
            .map(|(_, item)| item.clone())
            .collect(),
    )
}

/// Drop the elements whose position appears in `indices`
///
/// Unlike [`take_at_indices`], both `None` and an empty list leave the
/// sequence unchanged. An empty `seq` returns `None`.
#[cfg(feature = "alloc")]
pub fn skip_at_indices<T: Clone>(seq: &[T], indices: Option<&[usize]>) -> Option<Vec<T>> {
    if seq.is_empty() {
        return None;
    }

    let indices = match indices {
        Some(indices) if !indices.is_empty() => indices,
        _ => return Some(seq.to_vec()),
    };

    let unwanted: BTreeSet<usize> = indices.iter().copied().collect();
    Some(
        seq.iter()
            .enumerate()
            .filter(|(i, _)| !unwanted.contains(i))
            .map(|(_, item)| item.clone())
            .collect(),
    )
}

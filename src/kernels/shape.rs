//! This module contains the array-shape kernels: transforms that move elements
//! around without computing new values.
//!
//! `reverse`, `partition_012` and `duplicate_zeros` work **in-place** and return
//! the caller's slice. `interleave` and `chunk` read their input and allocate the
//! result. No kernel here changes the length of the caller's sequence.

use super::swap::swap_in_bounds;
use crate::error::ArrayKitError;
use crate::traits::Scalar;

//==================================================================================
// 1. In-Place Transforms
//==================================================================================

/// Reverses the slice **in-place** with two pointers closing in from both ends.
pub fn reverse<T>(data: &mut [T]) -> &mut [T] {
    if data.len() > 1 {
        let mut i = 0;
        let mut j = data.len() - 1;
        while i < j {
            swap_in_bounds(data, i, j);
            i += 1;
            j -= 1;
        }
    }
    data
}

/// Dutch National Flag partition of a slice drawn from `{0, 1, 2}`.
///
/// One pass with three cursors: everything before `low` is 0, everything from
/// `high` onwards is 2, and `mid` scans the unclassified middle.
///
/// # Errors
/// `ArrayKitError::InvalidDomain` for the first element outside `{0, 1, 2}`. The
/// domain is checked before anything moves, so a rejected slice is untouched.
pub fn partition_012<T: Scalar>(data: &mut [T]) -> Result<&mut [T], ArrayKitError> {
    let zero = T::zero();
    let one = T::one();
    let two = one + one;

    if let Some((index, value)) = data
        .iter()
        .enumerate()
        .find(|&(_, &v)| v != zero && v != one && v != two)
    {
        return Err(ArrayKitError::InvalidDomain {
            index,
            value: format!("{:?}", value),
        });
    }

    let mut low = 0;
    let mut mid = 0;
    let mut high = data.len();
    while mid < high {
        if data[mid] == zero {
            swap_in_bounds(data, low, mid);
            low += 1;
            mid += 1;
        } else if data[mid] == one {
            mid += 1;
        } else {
            high -= 1;
            swap_in_bounds(data, mid, high);
        }
    }
    Ok(data)
}

/// Duplicates every zero **in-place**, shifting the tail right by one and
/// dropping whatever is pushed past the end.
///
/// The scan skips over the inserted copy, so a duplicated zero is never
/// duplicated again. A zero in the final position has no room for its copy and
/// is left alone. Worst case O(n²).
pub fn duplicate_zeros<T: Scalar>(data: &mut [T]) -> &mut [T] {
    let zero = T::zero();
    let len = data.len();
    let mut i = 0;
    while i < len {
        if data[i] == zero && i + 1 < len {
            data.copy_within(i..len - 1, i + 1);
            i += 2;
        } else {
            i += 1;
        }
    }
    data
}

//==================================================================================
// 2. Allocating Transforms
//==================================================================================

/// Interleaves the two halves of an even-length slice into a new vector:
/// `out[2i] = data[i]` and `out[2i + 1] = data[len / 2 + i]`.
///
/// # Errors
/// `ArrayKitError::OddLengthInterleave` when the length is odd.
pub fn interleave<T: Copy>(data: &[T]) -> Result<Vec<T>, ArrayKitError> {
    if data.len() % 2 != 0 {
        return Err(ArrayKitError::OddLengthInterleave(data.len()));
    }
    let (front, back) = data.split_at(data.len() / 2);
    let mut out = Vec::with_capacity(data.len());
    for (&a, &b) in front.iter().zip(back) {
        out.push(a);
        out.push(b);
    }
    Ok(out)
}

/// Splits the slice into consecutive chunks of `size`; the last one may be shorter.
///
/// # Errors
/// `ArrayKitError::InvalidChunkSize` when `size` is zero.
pub fn chunk<T: Clone>(data: &[T], size: usize) -> Result<Vec<Vec<T>>, ArrayKitError> {
    if size == 0 {
        return Err(ArrayKitError::InvalidChunkSize(size));
    }
    Ok(data.chunks(size).map(|c| c.to_vec()).collect())
}

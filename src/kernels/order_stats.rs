//! Order-statistic kernels: the k-th smallest element and its relatives.
//!
//! None of these kernels mutate the caller's sequence. Where a sort is needed it
//! runs on an internal working copy.

use super::sorting::sort_with;
use crate::config::SortAlgorithm;
use crate::error::ArrayKitError;
use crate::utils::{check_rank, ensure_min_len, ensure_non_empty};

/// Returns the element of 1-based rank `k` in ascending order, using bubble sort
/// on a copy of `data`.
///
/// # Errors
/// `ArrayKitError::InvalidRank` when `k` is outside `[1, data.len()]`.
pub fn kth_smallest<T: PartialOrd + Copy>(data: &[T], k: usize) -> Result<T, ArrayKitError> {
    kth_smallest_with(data, k, SortAlgorithm::Bubble)
}

/// As [`kth_smallest`], sorting the working copy with `algorithm`.
pub fn kth_smallest_with<T: PartialOrd + Copy>(
    data: &[T],
    k: usize,
    algorithm: SortAlgorithm,
) -> Result<T, ArrayKitError> {
    check_rank(k, data.len())?;
    let mut working = data.to_vec();
    sort_with(&mut working, algorithm);
    Ok(working[k - 1])
}

/// Returns the largest element left after removing one occurrence of the maximum.
///
/// A repeated maximum is therefore its own runner-up: `[5, 5, 3]` yields `5`.
///
/// # Errors
/// `ArrayKitError::InsufficientLength` for fewer than two elements.
pub fn second_largest<T: PartialOrd + Copy>(data: &[T]) -> Result<T, ArrayKitError> {
    ensure_min_len(data, 2)?;

    let (mut first, mut second) = if data[1] > data[0] {
        (data[1], data[0])
    } else {
        (data[0], data[1])
    };
    for &value in &data[2..] {
        if value > first {
            second = first;
            first = value;
        } else if value > second {
            second = value;
        }
    }
    Ok(second)
}

/// Returns `(min, max)` in a single pass.
///
/// # Errors
/// `ArrayKitError::EmptyInput` for an empty sequence.
pub fn min_max<T: PartialOrd + Copy>(data: &[T]) -> Result<(T, T), ArrayKitError> {
    ensure_non_empty("min_max", data)?;
    let mut min = data[0];
    let mut max = data[0];
    for &value in &data[1..] {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Ok((min, max))
}

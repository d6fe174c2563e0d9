//! Hash-backed membership kernels: union, intersection, duplicates, frequencies,
//! gaps and pair search.
//!
//! These kernels never mutate their inputs. Hash tables come from `hashbrown`.

use hashbrown::{HashMap, HashSet};
use num_traits::PrimInt;
use std::hash::Hash;

use super::sorting::selection_sort;
use crate::error::ArrayKitError;

/// Upper bound on how many values [`missing_numbers`] will materialise.
pub const MAX_MISSING_NUMBERS: usize = 1 << 20;

/// Distinct elements of `a` and `b`, ascending.
pub fn union<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Eq + Hash + PartialOrd,
{
    let mut seen = HashSet::with_capacity(a.len() + b.len());
    let mut out: Vec<T> = a.iter().chain(b).copied().filter(|v| seen.insert(*v)).collect();
    selection_sort(&mut out);
    out
}

/// Elements of `a` that also occur in `b`, in `a`'s order. Repeats in `a` are kept.
pub fn intersection<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let lookup: HashSet<T> = b.iter().copied().collect();
    a.iter().copied().filter(|v| lookup.contains(v)).collect()
}

/// Occurrence count of every distinct value.
pub fn frequency<T>(data: &[T]) -> HashMap<T, usize>
where
    T: Copy + Eq + Hash,
{
    let mut counts = HashMap::new();
    for &value in data {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Distinct values that occur more than once, in order of first appearance.
pub fn duplicates<T>(data: &[T]) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let counts = frequency(data);
    let mut emitted = HashSet::new();
    data.iter()
        .copied()
        .filter(|v| counts[v] > 1 && emitted.insert(*v))
        .collect()
}

/// Every integer strictly between neighbours of an ascending sequence.
///
/// `[0, 1, 3, 4, 5, 10]` yields `[2, 6, 7, 8, 9]`. Descending or equal
/// neighbours contribute nothing.
///
/// # Errors
/// `ArrayKitError::GapTooLarge` when the gaps add up to more than
/// [`MAX_MISSING_NUMBERS`] values. Nothing is allocated in that case.
pub fn missing_numbers<T: PrimInt>(sorted: &[T]) -> Result<Vec<T>, ArrayKitError> {
    let one = T::one();
    let mut total = 0usize;
    for pair in sorted.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if high > low {
            // An unrepresentable difference is far beyond the limit anyway.
            let gap = high
                .checked_sub(&low)
                .and_then(|diff| diff.to_usize())
                .map(|diff| diff - 1);
            total = match gap.and_then(|gap| total.checked_add(gap)) {
                Some(sum) if sum <= MAX_MISSING_NUMBERS => sum,
                _ => {
                    return Err(ArrayKitError::GapTooLarge {
                        limit: MAX_MISSING_NUMBERS,
                    })
                }
            };
        }
    }

    let mut missing = Vec::with_capacity(total);
    for pair in sorted.windows(2) {
        let (low, high) = (pair[0], pair[1]);
        if high > low {
            let mut value = low + one;
            while value < high {
                missing.push(value);
                value = value + one;
            }
        }
    }
    Ok(missing)
}

/// Finds `(i, j)` with `i < j` and `data[i] + data[j] == target` in one hash pass.
///
/// When several pairs exist, the lexicographically smallest `(i, j)` is
/// returned: the smallest `i`, then the smallest `j` for that `i`.
pub fn two_sum<T>(data: &[T], target: T) -> Option<(usize, usize)>
where
    T: PrimInt + Hash,
{
    let mut first_seen: HashMap<T, usize> = HashMap::with_capacity(data.len());
    let mut best: Option<(usize, usize)> = None;
    for (j, &value) in data.iter().enumerate() {
        if let Some(complement) = target.checked_sub(&value) {
            // The earliest index holding the complement is the best `i` for this `j`.
            if let Some(&i) = first_seen.get(&complement) {
                best = Some(best.map_or((i, j), |found| found.min((i, j))));
                if i == 0 {
                    break;
                }
            }
        }
        first_seen.entry(value).or_insert(j);
    }
    best
}

//! This module contains the pure, stateless, quadratic sorting kernels.
//!
//! All three routines sort ascending **in-place** through the swap primitive and
//! hand the same slice back to the caller, so the return value is an alias of the
//! input and never a new allocation. They only require `PartialOrd`; incomparable
//! values (e.g. `NaN`) are never swapped and therefore stay where they are
//! relative to their neighbours.

use super::swap::swap_in_bounds;
use crate::config::SortAlgorithm;

//==================================================================================
// 1. Public API
//==================================================================================

/// Bubble sort. Pass `i` (for `i` in `1..len`) bubbles the largest element of the
/// unsorted prefix `[0, len - i]` to its end. Every pass runs, even on input that
/// is already sorted. Equal neighbours never swap, so the sort is stable.
pub fn bubble_sort<T: PartialOrd>(data: &mut [T]) -> &mut [T] {
    let len = data.len();
    for i in 1..len {
        for j in 0..len - i {
            if data[j] > data[j + 1] {
                swap_in_bounds(data, j, j + 1);
            }
        }
    }
    data
}

/// Selection sort. For each position `i` the minimum of the suffix is swapped in;
/// among equal minima the earliest index wins. Not stable. Performs at most
/// `len - 1` swaps.
pub fn selection_sort<T: PartialOrd>(data: &mut [T]) -> &mut [T] {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if data[min] > data[j] {
                min = j;
            }
        }
        if min != i {
            swap_in_bounds(data, min, i);
        }
    }
    data
}

/// Insertion sort. Element `i` is swapped backwards past every strictly greater
/// predecessor. Stable, and linear when the input is already sorted.
pub fn insertion_sort<T: PartialOrd>(data: &mut [T]) -> &mut [T] {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j] < data[j - 1] {
            swap_in_bounds(data, j, j - 1);
            j -= 1;
        }
    }
    data
}

/// Sorts with the routine named by `algorithm`.
pub fn sort_with<T: PartialOrd>(data: &mut [T], algorithm: SortAlgorithm) -> &mut [T] {
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(data),
        SortAlgorithm::Selection => selection_sort(data),
        SortAlgorithm::Insertion => insertion_sort(data),
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
    ];

    #[test]
    fn test_sorts_mixed_signs() {
        for algorithm in ALL {
            let mut data = vec![5, -1, 3, 0, -7, 3, 2];
            sort_with(&mut data, algorithm);
            assert_eq!(data, vec![-7, -1, 0, 2, 3, 3, 5], "{:?}", algorithm);
        }
    }

    #[test]
    fn test_returns_alias_of_input() {
        let mut data = vec![3, 1, 2];
        let ptr = data.as_ptr();
        let sorted = bubble_sort(&mut data);
        assert_eq!(sorted.as_ptr(), ptr);
        assert_eq!(sorted, &[1, 2, 3]);
    }

    #[test]
    fn test_empty_and_single_are_unchanged() {
        for algorithm in ALL {
            let mut empty: Vec<i32> = vec![];
            assert!(sort_with(&mut empty, algorithm).is_empty());

            let mut single = vec![42];
            assert_eq!(sort_with(&mut single, algorithm), &[42]);
        }
    }

    #[test]
    fn test_reverse_sorted_input() {
        let mut a: Vec<i64> = (0..20).rev().collect();
        let mut b = a.clone();
        let mut c = a.clone();
        let expected: Vec<i64> = (0..20).collect();
        assert_eq!(bubble_sort(&mut a), expected.as_slice());
        assert_eq!(selection_sort(&mut b), expected.as_slice());
        assert_eq!(insertion_sort(&mut c), expected.as_slice());
    }

    #[test]
    fn test_stable_sorts_keep_equal_keys_in_order() {
        #[derive(Debug, Clone, Copy)]
        struct Keyed(i32, char);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let input = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];

        let mut bubbled = input;
        bubble_sort(&mut bubbled);
        let tags: String = bubbled.iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdac");

        let mut inserted = input;
        insertion_sort(&mut inserted);
        let tags: String = inserted.iter().map(|k| k.1).collect();
        assert_eq!(tags, "bdac");
    }

    #[test]
    fn test_floats() {
        let mut data = vec![2.5, -0.5, 1.0];
        insertion_sort(&mut data);
        assert_eq!(data, vec![-0.5, 1.0, 2.5]);
    }
}

//! This module serves as the public API and dispatcher for the collection of all
//! pure, stateless array kernels.
//!
//! It declares all kernel sub-modules and provides a single `dispatch` function,
//! the sole entry point for the `pipeline::executor`. It takes one `Operation`
//! from a plan and calls the matching generic kernel on an `i64` sequence.

use crate::config::KernelConfig;
use crate::error::ArrayKitError;
use crate::pipeline::models::{KernelOutput, Operation};

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Leaf primitive shared by every in-place kernel.
pub mod swap;

/// Quadratic in-place sorts.
pub mod sorting;

/// Rank queries (built on `sorting`).
pub mod order_stats;

/// Single-pass scans over contiguous runs.
pub mod subarray;

/// Reordering and reshaping transforms.
pub mod shape;

/// Hash-backed membership queries.
pub mod set_ops;


//==================================================================================
// 2. Public API (Unified Dispatcher)
//==================================================================================

/// Runs a single operation against `data`.
///
/// In-place operations rewrite `data` and report `KernelOutput::InPlace`; every
/// other operation leaves `data` untouched.
pub fn dispatch(
    op: &Operation,
    data: &mut [i64],
    config: &KernelConfig,
) -> Result<KernelOutput, ArrayKitError> {
    match op {
        Operation::Swap { first, second } => {
            swap::swap(data, *first, *second)?;
            Ok(KernelOutput::InPlace)
        }
        Operation::BubbleSort => {
            sorting::bubble_sort(data);
            Ok(KernelOutput::InPlace)
        }
        Operation::SelectionSort => {
            sorting::selection_sort(data);
            Ok(KernelOutput::InPlace)
        }
        Operation::InsertionSort => {
            sorting::insertion_sort(data);
            Ok(KernelOutput::InPlace)
        }
        Operation::Sort => {
            sorting::sort_with(data, config.sort_algorithm);
            Ok(KernelOutput::InPlace)
        }

        Operation::KthSmallest { k } => {
            order_stats::kth_smallest_with(data, *k, config.sort_algorithm)
                .map(KernelOutput::Scalar)
        }
        Operation::SecondLargest => order_stats::second_largest(data).map(KernelOutput::Scalar),
        Operation::MinMax => {
            order_stats::min_max(data).map(|(min, max)| KernelOutput::Pair(min, max))
        }

        Operation::MaxSubarraySum => subarray::max_subarray_sum(data).map(KernelOutput::Scalar),
        Operation::MaxSubarrayProduct => {
            subarray::max_subarray_product_with(data, config.product_semantics)
                .map(KernelOutput::Scalar)
        }
        Operation::MaxProfit => subarray::max_profit(data).map(KernelOutput::Scalar),
        Operation::TrappedWater => subarray::trapped_water(data).map(KernelOutput::Scalar),

        Operation::Reverse => {
            shape::reverse(data);
            Ok(KernelOutput::InPlace)
        }
        Operation::Interleave => shape::interleave(data).map(KernelOutput::Sequence),
        Operation::Partition012 => {
            shape::partition_012(data)?;
            Ok(KernelOutput::InPlace)
        }
        Operation::DuplicateZeros => {
            shape::duplicate_zeros(data);
            Ok(KernelOutput::InPlace)
        }
        Operation::Chunk { size } => shape::chunk(data, *size).map(KernelOutput::Chunks),

        Operation::Union { other } => Ok(KernelOutput::Sequence(set_ops::union(data, other))),
        Operation::Intersection { other } => {
            Ok(KernelOutput::Sequence(set_ops::intersection(data, other)))
        }
        Operation::Duplicates => Ok(KernelOutput::Sequence(set_ops::duplicates(data))),
        Operation::Frequency => {
            let mut counts: Vec<(i64, usize)> = set_ops::frequency(data).into_iter().collect();
            counts.sort_unstable_by_key(|&(value, _)| value);
            Ok(KernelOutput::Counts(counts))
        }
        Operation::MissingNumbers => set_ops::missing_numbers(data).map(KernelOutput::Sequence),
        Operation::TwoSum { target } => Ok(match set_ops::two_sum(data, *target) {
            Some((i, j)) => KernelOutput::Indices(i, j),
            None => KernelOutput::NotFound,
        }),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProductSemantics, SortAlgorithm};

    #[test]
    fn test_dispatch_in_place_rewrites_data() {
        let config = KernelConfig::default();
        let mut data = vec![3, 1, 2];
        let out = dispatch(&Operation::Sort, &mut data, &config).unwrap();
        assert_eq!(out, KernelOutput::InPlace);
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_dispatch_analysis_leaves_data() {
        let config = KernelConfig::default();
        let mut data = vec![7, 10, 4, 3, 20, 15];
        let out = dispatch(&Operation::KthSmallest { k: 3 }, &mut data, &config).unwrap();
        assert_eq!(out, KernelOutput::Scalar(7));
        assert_eq!(data, vec![7, 10, 4, 3, 20, 15]);
    }

    #[test]
    fn test_dispatch_honours_product_semantics() {
        let mut data = vec![-3];
        let standard = KernelConfig::default();
        let clamped = KernelConfig {
            product_semantics: ProductSemantics::Clamped,
            ..KernelConfig::default()
        };
        assert_eq!(
            dispatch(&Operation::MaxSubarrayProduct, &mut data, &standard).unwrap(),
            KernelOutput::Scalar(-3)
        );
        assert_eq!(
            dispatch(&Operation::MaxSubarrayProduct, &mut data, &clamped).unwrap(),
            KernelOutput::Scalar(1)
        );
    }

    #[test]
    fn test_dispatch_sort_algorithm_from_config() {
        let config = KernelConfig {
            sort_algorithm: SortAlgorithm::Selection,
            ..KernelConfig::default()
        };
        let mut data = vec![5, 4, 3, 2, 1];
        dispatch(&Operation::Sort, &mut data, &config).unwrap();
        assert_eq!(data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dispatch_structured_outputs() {
        let config = KernelConfig::default();
        let mut data = vec![10, 20, 40, 20];

        assert_eq!(
            dispatch(&Operation::Frequency, &mut data, &config).unwrap(),
            KernelOutput::Counts(vec![(10, 1), (20, 2), (40, 1)])
        );
        assert_eq!(
            dispatch(&Operation::MinMax, &mut data, &config).unwrap(),
            KernelOutput::Pair(10, 40)
        );
        assert_eq!(
            dispatch(&Operation::TwoSum { target: 60 }, &mut data, &config).unwrap(),
            KernelOutput::Indices(1, 2)
        );
        assert_eq!(
            dispatch(&Operation::TwoSum { target: 1 }, &mut data, &config).unwrap(),
            KernelOutput::NotFound
        );
        assert_eq!(
            dispatch(&Operation::Chunk { size: 3 }, &mut data, &config).unwrap(),
            KernelOutput::Chunks(vec![vec![10, 20, 40], vec![20]])
        );
    }

    #[test]
    fn test_dispatch_reports_overflow_instead_of_panicking() {
        let config = KernelConfig::default();

        let mut data = vec![1_000_000i64; 4];
        assert!(matches!(
            dispatch(&Operation::MaxSubarrayProduct, &mut data, &config),
            Err(ArrayKitError::ArithmeticOverflow { .. })
        ));

        let mut data = vec![i64::MAX, 1];
        assert!(matches!(
            dispatch(&Operation::MaxSubarraySum, &mut data, &config),
            Err(ArrayKitError::ArithmeticOverflow { .. })
        ));

        let mut data = vec![0, i64::MAX];
        assert!(matches!(
            dispatch(&Operation::MissingNumbers, &mut data, &config),
            Err(ArrayKitError::GapTooLarge { .. })
        ));
    }

    #[test]
    fn test_dispatch_propagates_kernel_errors() {
        let config = KernelConfig::default();
        let mut data = vec![1, 2, 3];
        assert!(matches!(
            dispatch(&Operation::Interleave, &mut data, &config),
            Err(ArrayKitError::OddLengthInterleave(3))
        ));
        assert!(matches!(
            dispatch(&Operation::Partition012, &mut data, &config),
            Err(ArrayKitError::InvalidDomain { index: 2, .. })
        ));
        assert!(matches!(
            dispatch(&Operation::Swap { first: 0, second: 9 }, &mut data, &config),
            Err(ArrayKitError::InvalidIndex { index: 9, len: 3 })
        ));
    }
}

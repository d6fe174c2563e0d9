// In: src/pipeline/models.rs

//! Defines the serializable contracts of the operation layer: the `Operation`
//! a caller asks for, the `KernelOutput` it gets back, and the `Plan` that
//! strings operations together.

use serde::{Deserialize, Serialize};

use crate::error::ArrayKitError;

/// The current version of the plan format.
pub const PLAN_FORMAT_VERSION: u16 = 1;

//==================================================================================
// I. Operation
//==================================================================================

/// One kernel invocation over an `i64` sequence.
///
/// Encoded as `{"op": "<name>", "params": {...}}`; operations without parameters
/// omit `params`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "op", content = "params", rename_all = "snake_case")]
pub enum Operation {
    // --- Swap & sorting (in-place) ---
    Swap { first: usize, second: usize },
    BubbleSort,
    SelectionSort,
    InsertionSort,
    /// Sorts with the configured `SortAlgorithm`.
    Sort,

    // --- Order statistics ---
    KthSmallest { k: usize },
    SecondLargest,
    MinMax,

    // --- Subarray analysis ---
    MaxSubarraySum,
    /// Uses the configured `ProductSemantics`.
    MaxSubarrayProduct,
    MaxProfit,
    TrappedWater,

    // --- Shape transforms ---
    Reverse,
    Interleave,
    #[serde(rename = "partition_012")]
    Partition012,
    DuplicateZeros,
    Chunk { size: usize },

    // --- Membership ---
    Union { other: Vec<i64> },
    Intersection { other: Vec<i64> },
    Duplicates,
    Frequency,
    MissingNumbers,
    TwoSum { target: i64 },
}

impl Operation {
    /// The wire name of the operation, used as the stage label in errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Swap { .. } => "swap",
            Operation::BubbleSort => "bubble_sort",
            Operation::SelectionSort => "selection_sort",
            Operation::InsertionSort => "insertion_sort",
            Operation::Sort => "sort",
            Operation::KthSmallest { .. } => "kth_smallest",
            Operation::SecondLargest => "second_largest",
            Operation::MinMax => "min_max",
            Operation::MaxSubarraySum => "max_subarray_sum",
            Operation::MaxSubarrayProduct => "max_subarray_product",
            Operation::MaxProfit => "max_profit",
            Operation::TrappedWater => "trapped_water",
            Operation::Reverse => "reverse",
            Operation::Interleave => "interleave",
            Operation::Partition012 => "partition_012",
            Operation::DuplicateZeros => "duplicate_zeros",
            Operation::Chunk { .. } => "chunk",
            Operation::Union { .. } => "union",
            Operation::Intersection { .. } => "intersection",
            Operation::Duplicates => "duplicates",
            Operation::Frequency => "frequency",
            Operation::MissingNumbers => "missing_numbers",
            Operation::TwoSum { .. } => "two_sum",
        }
    }

    /// Returns `true` if the operation rewrites the caller's sequence.
    pub fn is_in_place(&self) -> bool {
        matches!(
            self,
            Operation::Swap { .. }
                | Operation::BubbleSort
                | Operation::SelectionSort
                | Operation::InsertionSort
                | Operation::Sort
                | Operation::Reverse
                | Operation::Partition012
                | Operation::DuplicateZeros
        )
    }
}

//==================================================================================
// II. KernelOutput
//==================================================================================

/// The result of dispatching one `Operation`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum KernelOutput {
    /// The caller's sequence was rewritten; read it for the result.
    InPlace,
    Sequence(Vec<i64>),
    Scalar(i64),
    /// An ordered pair of values, e.g. `(min, max)`.
    Pair(i64, i64),
    Indices(usize, usize),
    Chunks(Vec<Vec<i64>>),
    /// `(value, count)` pairs, ascending by value.
    Counts(Vec<(i64, usize)>),
    NotFound,
}

//==================================================================================
// III. Plan
//==================================================================================

/// An ordered list of operations applied to one sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    #[serde(default = "default_plan_version")]
    pub version: u16,
    pub operations: Vec<Operation>,
}

impl Plan {
    pub fn new(operations: Vec<Operation>) -> Self {
        Self {
            version: PLAN_FORMAT_VERSION,
            operations,
        }
    }

    /// Parses a plan from JSON and rejects versions this build does not understand.
    pub fn from_json(json: &str) -> Result<Self, ArrayKitError> {
        let plan: Plan = serde_json::from_str(json)?;
        if plan.version != PLAN_FORMAT_VERSION {
            return Err(ArrayKitError::UnsupportedOperation(format!(
                "plan version {} (expected {})",
                plan.version, PLAN_FORMAT_VERSION
            )));
        }
        Ok(plan)
    }

    pub fn to_json(&self) -> Result<String, ArrayKitError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn default_plan_version() -> u16 {
    PLAN_FORMAT_VERSION
}

// In: src/config.rs

//! The single source of truth for all arraykit kernel configuration.
//!
//! `KernelConfig` is created once at the application boundary (typically from a
//! JSON document) and passed by reference into the dispatcher and the plan
//! executor. It only selects between behaviors the kernels already implement;
//! it never changes a kernel's contract.

use serde::{Deserialize, Serialize};

use crate::error::ArrayKitError;

//==================================================================================
// I. Configuration Enums
//==================================================================================

/// Selects the in-place routine used wherever the library sorts on a caller's
/// behalf (the k-th smallest kernel and the generic `sort` operation).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortAlgorithm {
    /// **Default:** adjacent-swap passes, no early exit.
    #[default]
    Bubble,
    /// Minimum-of-suffix selection. Not stable.
    Selection,
    /// Backward adjacent-swap insertion. Stable, linear on sorted input.
    Insertion,
}

/// Selects how the maximum subarray product treats its running extremes.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProductSemantics {
    /// **Default:** unclamped running max/min. The result is the true maximum
    /// product of a non-empty contiguous subarray.
    #[default]
    Standard,

    /// Legacy behavior: the running min is capped at 1 on positive elements,
    /// the running max is floored at 1 on negative elements and the result is
    /// floored at 0. Kept for callers that depend on the old numbers.
    Clamped,
}

//==================================================================================
// II. The Unified KernelConfig
//==================================================================================

/// The single, unified configuration for kernel dispatch and plan execution.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct KernelConfig {
    /// Routine used when the library sorts on the caller's behalf.
    #[serde(default)]
    pub sort_algorithm: SortAlgorithm,

    /// Semantics of the maximum subarray product.
    #[serde(default)]
    pub product_semantics: ProductSemantics,

    /// If true, the plan executor logs one line per executed step.
    #[serde(default = "default_true")]
    pub log_steps: bool,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            sort_algorithm: SortAlgorithm::default(),
            product_semantics: ProductSemantics::default(),
            log_steps: true,
        }
    }
}

impl KernelConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults;
    /// unknown fields are rejected.
    pub fn from_json(json: &str) -> Result<Self, ArrayKitError> {
        serde_json::from_str(json).map_err(|e| ArrayKitError::Config(e.to_string()))
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

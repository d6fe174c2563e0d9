// In: src/error.rs

//! This module defines the single, unified error type for the entire arraykit library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Kernel variants report either a precondition violation or an arithmetic result
//! that does not fit the element type. No in-place kernel fails after it has
//! started mutating its input. Nothing here is retryable.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrayKitError {
    // =========================================================================
    // === Kernel Precondition Errors
    // =========================================================================
    #[error("Index {index} is out of bounds for a sequence of length {len}")]
    InvalidIndex { index: usize, len: usize },

    #[error("Rank out of range: k = {k} must be within [1, {len}]")]
    InvalidRank { k: usize, len: usize },

    #[error("Value {value} at index {index} is outside the domain {{0, 1, 2}}")]
    InvalidDomain { index: usize, value: String },

    #[error("Interleave requires an even-length sequence, got length {0}")]
    OddLengthInterleave(usize),

    #[error("Operation '{0}' requires a non-empty sequence")]
    EmptyInput(String),

    #[error("Sequence too short: need at least {needed} elements, got {actual}")]
    InsufficientLength { needed: usize, actual: usize },

    #[error("Chunk size must be greater than zero, got {0}")]
    InvalidChunkSize(usize),

    #[error("Arithmetic overflow in '{op}': the result does not fit the element type")]
    ArithmeticOverflow { op: String },

    #[error("Gap too large: more than {limit} missing values would be produced")]
    GapTooLarge { limit: usize },

    // =========================================================================
    // === Operation Layer / Configuration Errors
    // =========================================================================
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// An error from the Serde JSON library, typically while decoding a plan or config.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Plan execution failed at stage '{stage}': {source}")]
    PipelineError {
        stage: String,
        #[source]
        source: Box<ArrayKitError>,
    },
}

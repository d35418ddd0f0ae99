//! Unified error hierarchy for FitRS.
//!
//! Structured error types per subsystem with a top-level umbrella, as
//! consumed by the CLI and the integration tests.

use thiserror::Error;

/// Top-level error type for all FitRS operations
#[derive(Debug, Error)]
pub enum FitrsError {
    /// Sensor package dispatch errors
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Input decoding errors
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while matching a sensor package against the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Workout code absent from the registry
    #[error("Unknown workout type: {code}")]
    UnknownWorkoutType { code: String },

    /// Reading count differs from the variant's field count
    #[error("Workout {code} expects {expected} readings, got {actual}")]
    ArgumentCountMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },
}

/// Errors raised while decoding a package batch from an input source
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Malformed JSON input
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed CSV input
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// A reading field that is not a number
    #[error("Invalid reading {value:?} in record {index}")]
    InvalidReading { index: usize, value: String },

    /// A record with no workout code
    #[error("Missing workout code in record {index}")]
    MissingCode { index: usize },

    /// Input format neither given nor inferable
    #[error("Unsupported input format: {format}")]
    UnsupportedFormat { format: String },
}

/// Result type alias for FitRS operations
pub type Result<T> = std::result::Result<T, FitrsError>;

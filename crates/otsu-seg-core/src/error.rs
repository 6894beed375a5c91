//! Error types for otsu-seg-core
//!
//! Provides a unified error type for the buffer and histogram operations
//! in the core crate. Each variant carries enough context to locate the
//! offending input without exposing internal layout.

use thiserror::Error;

/// otsu-seg core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sample lies outside the 8-bit greyscale range [0, 255]
    #[error("invalid sample {value} at ({x}, {y}): expected a value in 0..=255")]
    InvalidSample { x: u32, y: u32, value: i32 },

    /// Sample count does not match the declared dimensions
    #[error("dimension mismatch: {width}x{height} needs {expected} samples, got {actual}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;

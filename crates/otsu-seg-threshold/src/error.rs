//! Error types for otsu-seg-threshold

use thiserror::Error;

/// Errors that can occur while selecting a threshold or deriving its outputs
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] otsu_seg_core::Error),

    /// Empty image
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// The pixel count given to the selector disagrees with the histogram
    #[error("pixel count mismatch: histogram holds {histogram} pixels, caller passed {given}")]
    PixelCountMismatch { histogram: u64, given: u64 },
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;

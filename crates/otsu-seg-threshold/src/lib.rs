//! otsu-seg Threshold - Otsu segmentation of greyscale images
//!
//! This crate turns a [`PixelBuffer`](otsu_seg_core::PixelBuffer) into a
//! foreground/background split:
//!
//! - **Threshold selection** ([`otsu`]): Otsu's between-class variance search
//! - **Masks** ([`mask`]): Complementary foreground/background masks
//! - **Affection ratio** ([`ratio`]): Fraction of pixels above threshold
//! - **Pipeline** ([`segment`]): All stages in one call
//! - **Report** ([`report`]): Plain-text summary of a run
//!
//! Every operation is a pure function of its inputs; distinct images can be
//! processed on separate threads without synchronization.

pub mod error;
pub mod mask;
pub mod otsu;
pub mod ratio;
pub mod report;
pub mod segment;

// Re-export core types
pub use otsu_seg_core;

// Re-export error types
pub use error::{ThresholdError, ThresholdResult};

// Re-export threshold functions
pub use otsu::{
    // Types
    OtsuOptions,
    Precision,
    // Functions
    between_class_scores,
    select_threshold,
    select_threshold_with,
};

// Re-export mask and ratio functions
pub use mask::{generate_masks, threshold_to_mask};
pub use ratio::{estimate_ratio, ratio_from_mask};

// Re-export pipeline types and functions
pub use report::SegmentationReport;
pub use segment::{Segmentation, segment, segment_with};

//! otsu-seg - Greyscale foreground/background segmentation
//!
//! Splits an 8-bit greyscale image into foreground and background with
//! Otsu's automatic threshold and reports the fraction of pixels above the
//! threshold (the affection ratio).
//!
//! # Overview
//!
//! The pipeline has four stages, each a pure function:
//!
//! - [`build_histogram`] - 256-bin intensity histogram
//! - [`select_threshold`] - Otsu's between-class variance search
//! - [`generate_masks`] - Complementary foreground/background masks
//! - [`estimate_ratio`] - Fraction of pixels above threshold
//!
//! [`segment`] runs all four in order. Decoding images into a
//! [`PixelBuffer`] and encoding masks back to files is left to the caller.
//!
//! # Example
//!
//! ```
//! use otsu_seg::{PixelBuffer, segment};
//!
//! let buf = PixelBuffer::from_gray8(4, 1, &[12, 15, 180, 200]).unwrap();
//! let seg = segment(&buf).unwrap();
//! assert_eq!(seg.threshold, 15);
//! assert_eq!(seg.foreground.data(), &[0, 0, 255, 255]);
//! assert_eq!(seg.ratio, 0.5);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use otsu_seg_core::*;

// Re-export the threshold crate as a module and its main entry points
pub use otsu_seg_threshold as threshold;
pub use otsu_seg_threshold::{
    OtsuOptions, Precision, Segmentation, SegmentationReport, ThresholdError, ThresholdResult,
    estimate_ratio, generate_masks, segment, segment_with, select_threshold,
    select_threshold_with,
};

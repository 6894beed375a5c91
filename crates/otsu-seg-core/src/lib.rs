//! otsu-seg Core - Basic data structures for greyscale segmentation
//!
//! This crate provides the data model shared by every stage of the
//! segmentation pipeline:
//!
//! - [`PixelBuffer`] - Immutable greyscale sample grid (pipeline input)
//! - [`Histogram`] - 256-bin intensity histogram, built by [`build_histogram`]
//! - [`BinaryMask`] - 0/255 mask with the dimensions of its source
//! - [`Error`] - Errors raised while validating buffers and samples
//!
//! The [`logger`] module installs a minimal stderr logger for binaries and
//! test harnesses; library code only emits through the `log` facade.

pub mod buffer;
pub mod error;
pub mod histogram;
pub mod logger;
pub mod mask;

pub use buffer::PixelBuffer;
pub use error::{Error, Result};
pub use histogram::{HISTOGRAM_BINS, Histogram, build_histogram, build_histogram_sampled};
pub use mask::{BinaryMask, MASK_OFF, MASK_ON};

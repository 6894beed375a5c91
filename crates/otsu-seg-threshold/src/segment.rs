//! One-call segmentation pipeline
//!
//! Runs histogram → threshold → masks → ratio in dependency order and
//! hands every intermediate result back to the caller. Nothing is retained
//! between calls; a caller that needs the last result later keeps the
//! returned [`Segmentation`].

use crate::error::{ThresholdError, ThresholdResult};
use crate::mask::generate_masks;
use crate::otsu::{OtsuOptions, select_threshold_with};
use crate::ratio::ratio_from_mask;
use crate::report::SegmentationReport;
use otsu_seg_core::{BinaryMask, PixelBuffer, build_histogram};

/// Output of [`segment`]
#[derive(Debug, Clone, PartialEq)]
pub struct Segmentation {
    /// Selected Otsu threshold
    pub threshold: u8,
    /// Pixels `> threshold`
    pub foreground: BinaryMask,
    /// Pixels `<= threshold`
    pub background: BinaryMask,
    /// Fraction of pixels in the foreground
    pub ratio: f64,
}

impl Segmentation {
    /// Width of the segmented image
    pub fn width(&self) -> u32 {
        self.foreground.width()
    }

    /// Height of the segmented image
    pub fn height(&self) -> u32 {
        self.foreground.height()
    }

    /// Summarize this result as a printable report labelled `name`.
    pub fn report(&self, name: &str) -> SegmentationReport {
        SegmentationReport {
            name: name.to_string(),
            width: self.width(),
            height: self.height(),
            threshold: self.threshold,
            foreground_pixels: self.foreground.count_set(),
            background_pixels: self.background.count_set(),
            ratio: self.ratio,
        }
    }
}

/// Segment `buffer` with default [`OtsuOptions`].
///
/// # Errors
///
/// - [`ThresholdError::EmptyImage`] if the buffer has no pixels
/// - [`ThresholdError::Core`] wrapping `InvalidSample` for out-of-range
///   samples
///
/// # Example
///
/// ```
/// use otsu_seg_core::PixelBuffer;
/// use otsu_seg_threshold::segment;
///
/// let buf = PixelBuffer::from_gray8(2, 2, &[20, 20, 220, 220]).unwrap();
/// let seg = segment(&buf).unwrap();
/// assert_eq!(seg.threshold, 20);
/// assert_eq!(seg.ratio, 0.5);
/// ```
pub fn segment(buffer: &PixelBuffer) -> ThresholdResult<Segmentation> {
    segment_with(buffer, &OtsuOptions::default())
}

/// Segment `buffer` with explicit options.
///
/// See [`segment`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(width = buffer.width(), height = buffer.height()))
)]
pub fn segment_with(buffer: &PixelBuffer, options: &OtsuOptions) -> ThresholdResult<Segmentation> {
    if buffer.is_empty() {
        return Err(ThresholdError::EmptyImage);
    }

    let histogram = build_histogram(buffer)?;
    log::trace!(
        "histogram: {} pixels over {} levels",
        histogram.total(),
        histogram.occupied_levels()
    );

    let threshold = select_threshold_with(&histogram, histogram.total(), options)?;
    let (foreground, background) = generate_masks(buffer, threshold);
    let ratio = ratio_from_mask(&foreground)?;
    log::debug!(
        "segmented {}x{}: threshold {}, ratio {:.4}",
        buffer.width(),
        buffer.height(),
        threshold,
        ratio
    );

    Ok(Segmentation {
        threshold,
        foreground,
        background,
        ratio,
    })
}

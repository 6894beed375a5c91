//! Affection ratio estimation
//!
//! The ratio is the fraction of pixels strictly above the threshold, i.e.
//! the share of the image that the foreground mask covers.

use crate::error::{ThresholdError, ThresholdResult};
use otsu_seg_core::{BinaryMask, PixelBuffer};

/// Fraction of pixels in `buffer` with a value `> threshold`.
///
/// Uses the same comparison as the foreground mask, so the result always
/// equals `ratio_from_mask(&generate_masks(buffer, threshold).0)`.
///
/// # Errors
///
/// Returns [`ThresholdError::EmptyImage`] if the buffer has no pixels.
pub fn estimate_ratio(buffer: &PixelBuffer, threshold: u8) -> ThresholdResult<f64> {
    if buffer.is_empty() {
        return Err(ThresholdError::EmptyImage);
    }
    let t = i32::from(threshold);
    let affected = buffer.samples().iter().filter(|&&v| v > t).count();
    Ok(affected as f64 / buffer.pixel_count() as f64)
}

/// Fraction of set cells in a foreground mask.
///
/// # Errors
///
/// Returns [`ThresholdError::EmptyImage`] if the mask has no cells.
pub fn ratio_from_mask(foreground: &BinaryMask) -> ThresholdResult<f64> {
    if foreground.is_empty() {
        return Err(ThresholdError::EmptyImage);
    }
    Ok(foreground.count_set() as f64 / foreground.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::generate_masks;

    #[test]
    fn test_ratio_basic() {
        let buf = PixelBuffer::from_gray8(4, 1, &[0, 100, 150, 255]).unwrap();
        assert_eq!(estimate_ratio(&buf, 100).unwrap(), 0.5);
        assert_eq!(estimate_ratio(&buf, 0).unwrap(), 0.75);
        assert_eq!(estimate_ratio(&buf, 255).unwrap(), 0.0);
    }

    #[test]
    fn test_ratio_agrees_with_mask() {
        let buf = PixelBuffer::from_fn(13, 7, |x, y| ((x * 31 + y * 17) % 256) as i32);
        for t in [0u8, 40, 128, 200, 255] {
            let (fg, _) = generate_masks(&buf, t);
            assert_eq!(
                estimate_ratio(&buf, t).unwrap(),
                ratio_from_mask(&fg).unwrap()
            );
        }
    }

    #[test]
    fn test_ratio_empty() {
        for (w, h) in [(0, 0), (0, 3), (3, 0)] {
            let buf = PixelBuffer::new(w, h, Vec::new()).unwrap();
            assert_eq!(
                estimate_ratio(&buf, 10).unwrap_err(),
                ThresholdError::EmptyImage
            );
            let (fg, _) = generate_masks(&buf, 10);
            assert_eq!(ratio_from_mask(&fg).unwrap_err(), ThresholdError::EmptyImage);
        }
    }
}

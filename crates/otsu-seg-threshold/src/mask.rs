//! Foreground/background mask generation
//!
//! Pixels strictly above the threshold are foreground; pixels at or below
//! it are background. Level `t` belongs to the background, matching the
//! class split used by the selector.

use otsu_seg_core::{BinaryMask, PixelBuffer};

/// Produce the foreground and background masks for `threshold`.
///
/// `foreground[p] = 255` iff `p > threshold`, `background[p] = 255` iff
/// `p <= threshold`. The two masks are exact complements and share the
/// dimensions of `buffer`. A zero-sized buffer yields zero-sized masks.
///
/// # Example
///
/// ```
/// use otsu_seg_core::PixelBuffer;
/// use otsu_seg_threshold::generate_masks;
///
/// let buf = PixelBuffer::from_gray8(3, 1, &[10, 100, 101]).unwrap();
/// let (fg, bg) = generate_masks(&buf, 100);
/// assert_eq!(fg.data(), &[0, 0, 255]);
/// assert_eq!(bg.data(), &[255, 255, 0]);
/// ```
pub fn generate_masks(buffer: &PixelBuffer, threshold: u8) -> (BinaryMask, BinaryMask) {
    let t = i32::from(threshold);
    let foreground = BinaryMask::from_predicate(
        buffer.width(),
        buffer.height(),
        buffer.samples(),
        |v| v > t,
    );
    let background = BinaryMask::from_predicate(
        buffer.width(),
        buffer.height(),
        buffer.samples(),
        |v| v <= t,
    );
    (foreground, background)
}

/// Convert a greyscale buffer to a binary mask using a fixed threshold.
///
/// Equivalent to the foreground half of [`generate_masks`]:
/// pixels `> threshold` become 255, the rest 0.
pub fn threshold_to_mask(buffer: &PixelBuffer, threshold: u8) -> BinaryMask {
    let t = i32::from(threshold);
    BinaryMask::from_predicate(buffer.width(), buffer.height(), buffer.samples(), |v| v > t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use otsu_seg_core::{MASK_OFF, MASK_ON};

    #[test]
    fn test_masks_are_complementary() {
        let buf = PixelBuffer::from_fn(16, 16, |x, y| (x * 16 + y) as i32);
        for t in [0u8, 1, 127, 128, 254, 255] {
            let (fg, bg) = generate_masks(&buf, t);
            assert!(fg.sizes_equal(&bg));
            for (a, b) in fg.data().iter().zip(bg.data()) {
                assert_ne!(a, b);
                assert!(*a == MASK_ON || *a == MASK_OFF);
                assert!(*b == MASK_ON || *b == MASK_OFF);
            }
        }
    }

    #[test]
    fn test_threshold_level_is_background() {
        let buf = PixelBuffer::filled(2, 2, 77);
        let (fg, bg) = generate_masks(&buf, 77);
        assert_eq!(fg.count_set(), 0);
        assert_eq!(bg.count_set(), 4);
    }

    #[test]
    fn test_threshold_to_mask_matches_foreground() {
        let buf = PixelBuffer::from_fn(8, 8, |x, y| ((x + y) * 16) as i32);
        let (fg, _) = generate_masks(&buf, 100);
        assert_eq!(threshold_to_mask(&buf, 100), fg);
    }

    #[test]
    fn test_source_untouched() {
        let buf = PixelBuffer::from_gray8(2, 1, &[3, 250]).unwrap();
        let copy = buf.clone();
        let _ = generate_masks(&buf, 100);
        assert_eq!(buf, copy);
    }

    #[test]
    fn test_empty_buffer() {
        let buf = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        let (fg, bg) = generate_masks(&buf, 0);
        assert!(fg.is_empty());
        assert!(bg.is_empty());
    }
}

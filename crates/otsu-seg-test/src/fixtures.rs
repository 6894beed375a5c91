//! Synthetic greyscale test images
//!
//! Regression tests build their inputs here instead of decoding files, so
//! every expected value can be recomputed by hand.

use otsu_seg_core::PixelBuffer;

/// Image whose first half of pixels (row-major) is `low` and second half
/// is `high`. With an odd pixel count the extra pixel is `high`.
pub fn bimodal(width: u32, height: u32, low: u8, high: u8) -> PixelBuffer {
    let half = (width as u64 * height as u64) / 2;
    PixelBuffer::from_fn(width, height, |x, y| {
        let idx = y as u64 * width as u64 + x as u64;
        if idx < half {
            i32::from(low)
        } else {
            i32::from(high)
        }
    })
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn gradient(width: u32, height: u32) -> PixelBuffer {
    let span = width.saturating_sub(1).max(1);
    PixelBuffer::from_fn(width, height, |x, _| (x * 255 / span) as i32)
}

/// Checkerboard of `cell`-sized squares alternating `a` and `b`,
/// starting with `a` at the origin.
pub fn checker(width: u32, height: u32, cell: u32, a: u8, b: u8) -> PixelBuffer {
    let cell = cell.max(1);
    PixelBuffer::from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            i32::from(a)
        } else {
            i32::from(b)
        }
    })
}

/// Disk of radius `radius` centered in the image, `inside` within the disk
/// (distance <= radius) and `outside` elsewhere.
pub fn disk(width: u32, height: u32, radius: u32, inside: u8, outside: u8) -> PixelBuffer {
    let cx = width as i64 / 2;
    let cy = height as i64 / 2;
    let r2 = radius as i64 * radius as i64;
    PixelBuffer::from_fn(width, height, |x, y| {
        let dx = x as i64 - cx;
        let dy = y as i64 - cy;
        if dx * dx + dy * dy <= r2 {
            i32::from(inside)
        } else {
            i32::from(outside)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bimodal_split() {
        let buf = bimodal(4, 4, 50, 200);
        assert_eq!(buf.samples().iter().filter(|&&v| v == 50).count(), 8);
        assert_eq!(buf.samples().iter().filter(|&&v| v == 200).count(), 8);

        let odd = bimodal(3, 1, 1, 2);
        assert_eq!(odd.samples(), &[1, 2, 2]);
    }

    #[test]
    fn test_gradient_ends() {
        let buf = gradient(256, 2);
        assert_eq!(buf.get(0, 1), Some(0));
        assert_eq!(buf.get(255, 1), Some(255));
        assert_eq!(gradient(1, 1).get(0, 0), Some(0));
    }

    #[test]
    fn test_checker_cells() {
        let buf = checker(4, 4, 2, 0, 255);
        assert_eq!(buf.get(0, 0), Some(0));
        assert_eq!(buf.get(2, 0), Some(255));
        assert_eq!(buf.get(2, 2), Some(0));
    }

    #[test]
    fn test_disk_center_and_corner() {
        let buf = disk(21, 21, 5, 220, 30);
        assert_eq!(buf.get(10, 10), Some(220));
        assert_eq!(buf.get(15, 10), Some(220));
        assert_eq!(buf.get(0, 0), Some(30));
    }
}

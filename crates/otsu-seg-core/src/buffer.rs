//! PixelBuffer - greyscale sample grid
//!
//! `PixelBuffer` is the input to every stage of the segmentation
//! pipeline. Samples are kept as `i32` so that values produced by a faulty
//! upstream conversion survive until the histogram builder can reject them
//! with [`Error::InvalidSample`](crate::Error::InvalidSample).
//!
//! # Pixel layout
//!
//! - Samples are stored row-major, one `i32` per pixel
//! - Row `y` occupies `samples[y * width .. (y + 1) * width]`
//! - Zero-sized buffers are allowed; stages that need pixels reject them
//!
//! # Ownership model
//!
//! `PixelBuffer` is immutable and uses `Arc` for cheap cloning, so the same
//! buffer can be handed to several workers without copying.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Greyscale image buffer
///
/// # Examples
///
/// ```
/// use otsu_seg_core::PixelBuffer;
///
/// let buf = PixelBuffer::from_gray8(2, 2, &[0, 64, 128, 255]).unwrap();
/// assert_eq!(buf.width(), 2);
/// assert_eq!(buf.pixel_count(), 4);
/// assert_eq!(buf.get(1, 1), Some(255));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    samples: Arc<[i32]>,
}

impl PixelBuffer {
    /// Create a buffer from row-major samples.
    ///
    /// Sample values are not range-checked here; see
    /// [`build_histogram`](crate::build_histogram).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `samples.len()` is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, samples: Vec<i32>) -> Result<Self> {
        let expected = Self::expected_len(width, height);
        if samples.len() != expected {
            return Err(Error::DimensionMismatch {
                width,
                height,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples: samples.into(),
        })
    }

    /// Create a buffer from 8-bit greyscale data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `data.len()` is not
    /// `width * height`.
    pub fn from_gray8(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        Self::new(width, height, data.iter().map(|&v| i32::from(v)).collect())
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: i32) -> Self {
        Self {
            width,
            height,
            samples: vec![value; Self::expected_len(width, height)].into(),
        }
    }

    /// Create a buffer by evaluating `f(x, y)` for every pixel in row-major
    /// order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> i32,
    {
        let mut samples = Vec::with_capacity(Self::expected_len(width, height));
        for y in 0..height {
            for x in 0..width {
                samples.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            samples: samples.into(),
        }
    }

    #[inline]
    fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize
    }

    /// Width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of pixels (`width * height`)
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.samples.len()
    }

    /// True if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the sample at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples[y as usize * self.width as usize + x as usize])
    }

    /// All samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[i32] {
        let start = y as usize * self.width as usize;
        &self.samples[start..start + self.width as usize]
    }

    /// Iterate over rows from top to bottom.
    ///
    /// Yields nothing for a buffer with zero width.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[i32]> + '_ {
        let rows = if self.width == 0 { 0 } else { self.height };
        (0..rows).map(move |y| self.row(y))
    }

    /// Check if two buffers have the same width and height.
    pub fn sizes_equal(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }
}

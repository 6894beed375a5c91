//! BinaryMask - two-valued segmentation output
//!
//! Every cell is either [`MASK_OFF`] (0) or [`MASK_ON`] (255), so a mask
//! can be handed directly to an encoder as an 8-bit greyscale image.

use std::sync::Arc;

/// Cell value for pixels inside the mask
pub const MASK_ON: u8 = 255;
/// Cell value for pixels outside the mask
pub const MASK_OFF: u8 = 0;

/// Binary mask with the dimensions of its source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    data: Arc<[u8]>,
}

impl BinaryMask {
    /// Build a mask by evaluating `inside` for every sample of a row-major
    /// sample slice.
    ///
    /// # Panics
    ///
    /// Panics if `samples.len()` is not `width * height`.
    pub fn from_predicate<F>(width: u32, height: u32, samples: &[i32], inside: F) -> Self
    where
        F: Fn(i32) -> bool,
    {
        assert_eq!(
            samples.len(),
            width as usize * height as usize,
            "sample count does not match mask dimensions"
        );
        let data = samples
            .iter()
            .map(|&v| if inside(v) { MASK_ON } else { MASK_OFF })
            .collect();
        Self {
            width,
            height,
            data,
        }
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

    /// Number of cells
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the mask has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cell value at (x, y), `None` if out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// True if the cell at (x, y) is [`MASK_ON`].
    #[inline]
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        self.get(x, y) == Some(MASK_ON)
    }

    /// Raw row-major cells.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of [`MASK_ON`] cells.
    pub fn count_set(&self) -> usize {
        self.data.iter().filter(|&&v| v == MASK_ON).count()
    }

    /// Check if two masks have the same width and height.
    pub fn sizes_equal(&self, other: &BinaryMask) -> bool {
        self.width == other.width && self.height == other.height
    }
}

//! Histogram generation for PixelBuffer images
//!
//! Counts the occurrence of each 8-bit intensity level. The histogram is
//! the only input the threshold search needs, so it is built once per
//! image and dropped after selection.

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use std::ops::Index;

/// Number of intensity levels in an 8-bit greyscale histogram
pub const HISTOGRAM_BINS: usize = 256;

/// Minimum pixel count before the row-parallel scan is used
#[cfg(feature = "parallel")]
pub const PARALLEL_MIN_PIXELS: usize = 30_000;

/// 256-bin intensity histogram
///
/// Index is the intensity level, value is the number of pixels at that
/// level. [`Histogram::total`] is always the sum of all counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; HISTOGRAM_BINS],
    total: u64,
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            counts: [0; HISTOGRAM_BINS],
            total: 0,
        }
    }
}

impl Histogram {
    /// Create a histogram from raw per-level counts.
    pub fn from_counts(counts: [u64; HISTOGRAM_BINS]) -> Self {
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Per-level counts.
    #[inline]
    pub fn counts(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.counts
    }

    /// Count at `level`.
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Number of pixels counted.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Always 256; provided for symmetry with slice-like containers.
    #[inline]
    pub fn len(&self) -> usize {
        HISTOGRAM_BINS
    }

    /// True if no pixels were counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Cumulative distribution as a prefix sum over levels.
    ///
    /// Entry `t` is the number of pixels with intensity `<= t`; the last
    /// entry equals [`total`](Self::total). Informational only: the
    /// threshold search keeps its own running sums.
    pub fn cumulative(&self) -> [u64; HISTOGRAM_BINS] {
        let mut cdf = [0u64; HISTOGRAM_BINS];
        let mut acc = 0u64;
        for (out, &c) in cdf.iter_mut().zip(self.counts.iter()) {
            acc += c;
            *out = acc;
        }
        cdf
    }

    /// Mean intensity, or `None` for an empty histogram.
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        let weighted: f64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(level, &c)| level as f64 * c as f64)
            .sum();
        Some(weighted / self.total as f64)
    }

    /// Number of levels with a nonzero count.
    pub fn occupied_levels(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    #[inline]
    fn add(&mut self, level: usize) {
        self.counts[level] += 1;
        self.total += 1;
    }

    #[cfg(feature = "parallel")]
    fn merge(&mut self, other: &Histogram) {
        for (a, b) in self.counts.iter_mut().zip(other.counts.iter()) {
            *a += b;
        }
        self.total += other.total;
    }
}

impl Index<usize> for Histogram {
    type Output = u64;

    fn index(&self, level: usize) -> &u64 {
        &self.counts[level]
    }
}

#[inline]
fn level_of(value: i32, x: u32, y: u32) -> Result<usize> {
    u8::try_from(value)
        .map(usize::from)
        .map_err(|_| Error::InvalidSample { x, y, value })
}

/// Build the intensity histogram of every pixel in `buffer`.
///
/// The counts sum to `width * height`. A zero-sized buffer yields an
/// empty histogram; rejecting it is left to the threshold stage.
///
/// # Errors
///
/// Returns [`Error::InvalidSample`] for the first sample (row-major order)
/// outside `0..=255`. No partial histogram is returned.
///
/// # Example
///
/// ```
/// use otsu_seg_core::{PixelBuffer, build_histogram};
///
/// let buf = PixelBuffer::from_gray8(2, 2, &[10, 10, 200, 10]).unwrap();
/// let hist = build_histogram(&buf).unwrap();
/// assert_eq!(hist[10], 3);
/// assert_eq!(hist[200], 1);
/// assert_eq!(hist.total(), 4);
/// ```
pub fn build_histogram(buffer: &PixelBuffer) -> Result<Histogram> {
    #[cfg(feature = "parallel")]
    if buffer.pixel_count() >= PARALLEL_MIN_PIXELS {
        return build_histogram_parallel(buffer);
    }

    let mut hist = Histogram::default();
    for (y, row) in buffer.rows().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            hist.add(level_of(value, x as u32, y as u32)?);
        }
    }
    Ok(hist)
}

/// Build a histogram from every `factor`-th column of every `factor`-th row.
///
/// `factor == 1` is equivalent to [`build_histogram`]. The histogram's
/// [`total`](Histogram::total) is the number of sampled pixels, which is
/// what the threshold search must be given.
///
/// # Errors
///
/// - [`Error::InvalidParameter`] if `factor` is 0
/// - [`Error::InvalidSample`] for the first sampled value outside `0..=255`
pub fn build_histogram_sampled(buffer: &PixelBuffer, factor: u32) -> Result<Histogram> {
    if factor == 0 {
        return Err(Error::InvalidParameter("factor must be >= 1".to_string()));
    }
    if factor == 1 {
        return build_histogram(buffer);
    }

    let mut hist = Histogram::default();
    let mut y = 0;
    while y < buffer.height() && buffer.width() > 0 {
        let row = buffer.row(y);
        let mut x = 0;
        while x < buffer.width() {
            hist.add(level_of(row[x as usize], x, y)?);
            x += factor;
        }
        y += factor;
    }
    Ok(hist)
}

/// Partial result of the row-parallel scan: merged counts plus the
/// earliest invalid sample seen so far.
#[cfg(feature = "parallel")]
#[derive(Default)]
struct RowScan {
    hist: Histogram,
    first_error: Option<(u32, u32, i32)>,
}

#[cfg(feature = "parallel")]
impl RowScan {
    fn note_error(&mut self, x: u32, y: u32, value: i32) {
        let earlier = match self.first_error {
            Some((ex, ey, _)) => (y, x) < (ey, ex),
            None => true,
        };
        if earlier {
            self.first_error = Some((x, y, value));
        }
    }

    fn combine(mut self, other: RowScan) -> RowScan {
        self.hist.merge(&other.hist);
        if let Some((x, y, value)) = other.first_error {
            self.note_error(x, y, value);
        }
        self
    }
}

#[cfg(feature = "parallel")]
fn build_histogram_parallel(buffer: &PixelBuffer) -> Result<Histogram> {
    use rayon::prelude::*;

    let width = buffer.width() as usize;
    let scan = buffer
        .samples()
        .par_chunks(width)
        .enumerate()
        .fold(RowScan::default, |mut acc, (y, row)| {
            for (x, &value) in row.iter().enumerate() {
                match u8::try_from(value) {
                    Ok(level) => acc.hist.add(usize::from(level)),
                    Err(_) => {
                        acc.note_error(x as u32, y as u32, value);
                        break;
                    }
                }
            }
            acc
        })
        .reduce(RowScan::default, RowScan::combine);

    match scan.first_error {
        Some((x, y, value)) => Err(Error::InvalidSample { x, y, value }),
        None => {
            log::trace!("parallel histogram over {} pixels", scan.hist.total());
            Ok(scan.hist)
        }
    }
}

//! Otsu's method (automatic threshold selection)
//!
//! Picks the intensity level that maximizes the between-class variance of
//! the two populations split at that level. Level `t` itself belongs to the
//! background (`<= t`) class.
//!
//! The score used for ranking is `wB * wF * (mB - mF)^2`, which is the
//! normalized between-class variance scaled by `N^2`; both rank levels
//! identically.

use crate::error::{ThresholdError, ThresholdResult};
use otsu_seg_core::{HISTOGRAM_BINS, Histogram};
use std::ops::{Add, Div, Mul, Sub};

/// Floating-point precision of the score accumulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// 32-bit accumulation (default)
    #[default]
    Single,
    /// 64-bit accumulation
    Double,
}

/// Options for Otsu threshold selection
#[derive(Debug, Clone, Default)]
pub struct OtsuOptions {
    /// Precision of the weighted sums and the score
    pub precision: Precision,
}

impl OtsuOptions {
    /// Options with the given precision.
    pub fn with_precision(precision: Precision) -> Self {
        Self { precision }
    }
}

/// Arithmetic needed by the score loop, implemented for `f32` and `f64`.
trait Accum:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    const ZERO: Self;
    fn from_u64(v: u64) -> Self;
    fn to_f64(self) -> f64;
}

impl Accum for f32 {
    const ZERO: Self = 0.0;
    #[inline]
    fn from_u64(v: u64) -> Self {
        v as f32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Accum for f64 {
    const ZERO: Self = 0.0;
    #[inline]
    fn from_u64(v: u64) -> Self {
        v as f64
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Walk levels 0..=255 and report the score of every level that splits the
/// histogram into two non-empty classes.
///
/// Levels before the first occupied one are skipped; the walk stops at the
/// first level where the foreground class becomes empty.
fn walk_scores<A: Accum>(
    counts: &[u64; HISTOGRAM_BINS],
    total: u64,
    mut visit: impl FnMut(usize, A),
) {
    let mut sum = A::ZERO;
    for (t, &h) in counts.iter().enumerate() {
        sum = sum + A::from_u64(t as u64 * h);
    }

    let mut sum_b = A::ZERO;
    let mut w_b = 0u64;

    for (t, &h) in counts.iter().enumerate() {
        w_b += h;
        if w_b == 0 {
            continue;
        }

        let w_f = total - w_b;
        if w_f == 0 {
            break;
        }

        sum_b = sum_b + A::from_u64(t as u64 * h);
        let m_b = sum_b / A::from_u64(w_b);
        let m_f = (sum - sum_b) / A::from_u64(w_f);
        let diff = m_b - m_f;
        let score = A::from_u64(w_b) * A::from_u64(w_f) * diff * diff;

        visit(t, score);
    }
}

fn select_in<A: Accum>(counts: &[u64; HISTOGRAM_BINS], total: u64) -> (u8, f64) {
    let mut best_score = A::ZERO;
    let mut best_t = 0usize;
    walk_scores::<A>(counts, total, |t, score| {
        // Strictly greater: the first level reaching the maximum wins.
        if score > best_score {
            best_score = score;
            best_t = t;
        }
    });
    (best_t as u8, best_score.to_f64())
}

fn check_total(histogram: &Histogram, total_pixels: u64) -> ThresholdResult<()> {
    if total_pixels == 0 {
        return Err(ThresholdError::EmptyImage);
    }
    if histogram.total() != total_pixels {
        return Err(ThresholdError::PixelCountMismatch {
            histogram: histogram.total(),
            given: total_pixels,
        });
    }
    Ok(())
}

/// Compute Otsu's threshold from a histogram with default options.
///
/// Returns the level that maximizes the between-class variance. Pixels
/// `<= threshold` are background, pixels `> threshold` are foreground.
/// An image with a single intensity level yields 0.
///
/// # Errors
///
/// - [`ThresholdError::EmptyImage`] if `total_pixels` is 0
/// - [`ThresholdError::PixelCountMismatch`] if `total_pixels` differs from
///   the histogram's total
///
/// # Example
///
/// ```
/// use otsu_seg_core::{PixelBuffer, build_histogram};
/// use otsu_seg_threshold::select_threshold;
///
/// let buf = PixelBuffer::from_gray8(4, 1, &[10, 20, 200, 210]).unwrap();
/// let hist = build_histogram(&buf).unwrap();
/// assert_eq!(select_threshold(&hist, 4).unwrap(), 20);
/// ```
pub fn select_threshold(histogram: &Histogram, total_pixels: u64) -> ThresholdResult<u8> {
    select_threshold_with(histogram, total_pixels, &OtsuOptions::default())
}

/// Compute Otsu's threshold from a histogram.
///
/// See [`select_threshold`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(histogram), fields(total = total_pixels))
)]
pub fn select_threshold_with(
    histogram: &Histogram,
    total_pixels: u64,
    options: &OtsuOptions,
) -> ThresholdResult<u8> {
    check_total(histogram, total_pixels)?;

    let (threshold, score) = match options.precision {
        Precision::Single => select_in::<f32>(histogram.counts(), total_pixels),
        Precision::Double => select_in::<f64>(histogram.counts(), total_pixels),
    };
    log::debug!(
        "otsu threshold {} (score {:.6e}, {:?} precision, {} pixels)",
        threshold,
        score,
        options.precision,
        total_pixels
    );
    Ok(threshold)
}

/// Between-class score for every level.
///
/// Entry `t` is `wB * wF * (mB - mF)^2` for the split at `t`, or 0 for
/// levels where either class is empty. [`select_threshold_with`] returns
/// the first arg-max of this curve (or 0 if every entry is 0).
///
/// # Errors
///
/// Same conditions as [`select_threshold`].
pub fn between_class_scores(
    histogram: &Histogram,
    total_pixels: u64,
    precision: Precision,
) -> ThresholdResult<[f64; HISTOGRAM_BINS]> {
    check_total(histogram, total_pixels)?;

    let mut scores = [0.0f64; HISTOGRAM_BINS];
    match precision {
        Precision::Single => {
            walk_scores::<f32>(histogram.counts(), total_pixels, |t, s| scores[t] = s.to_f64())
        }
        Precision::Double => {
            walk_scores::<f64>(histogram.counts(), total_pixels, |t, s| scores[t] = s)
        }
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_of(pairs: &[(usize, u64)]) -> Histogram {
        let mut counts = [0u64; HISTOGRAM_BINS];
        for &(level, n) in pairs {
            counts[level] += n;
        }
        Histogram::from_counts(counts)
    }

    #[test]
    fn test_bimodal_picks_first_maximal_level() {
        let hist = hist_of(&[(50, 8), (200, 8)]);
        assert_eq!(select_threshold(&hist, 16).unwrap(), 50);
    }

    #[test]
    fn test_three_levels() {
        // t=10: 2*6*(10-140)^2 = 202800, t=20: 4*4*(15-200)^2 = 547600
        let hist = hist_of(&[(10, 2), (20, 2), (200, 4)]);
        assert_eq!(select_threshold(&hist, 8).unwrap(), 20);
    }

    #[test]
    fn test_single_level_yields_zero() {
        for v in [0usize, 1, 128, 255] {
            let hist = hist_of(&[(v, 100)]);
            assert_eq!(select_threshold(&hist, 100).unwrap(), 0, "level {v}");
        }
    }

    #[test]
    fn test_empty_image() {
        let hist = Histogram::default();
        assert_eq!(
            select_threshold(&hist, 0).unwrap_err(),
            ThresholdError::EmptyImage
        );
    }

    #[test]
    fn test_pixel_count_mismatch() {
        let hist = hist_of(&[(3, 4)]);
        assert_eq!(
            select_threshold(&hist, 5).unwrap_err(),
            ThresholdError::PixelCountMismatch {
                histogram: 4,
                given: 5
            }
        );
    }

    #[test]
    fn test_deterministic() {
        let hist = hist_of(&[(3, 17), (40, 5), (41, 9), (90, 30), (180, 2), (230, 11)]);
        let first = select_threshold(&hist, hist.total()).unwrap();
        for _ in 0..10 {
            assert_eq!(select_threshold(&hist, hist.total()).unwrap(), first);
        }
    }

    #[test]
    fn test_scores_match_selection() {
        let hist = hist_of(&[(12, 40), (60, 25), (61, 5), (140, 30), (220, 50)]);
        let n = hist.total();
        for precision in [Precision::Single, Precision::Double] {
            let scores = between_class_scores(&hist, n, precision).unwrap();
            let mut best = 0usize;
            for t in 0..HISTOGRAM_BINS {
                if scores[t] > scores[best] {
                    best = t;
                }
            }
            let opts = OtsuOptions::with_precision(precision);
            assert_eq!(
                select_threshold_with(&hist, n, &opts).unwrap() as usize,
                best
            );
        }
    }

    #[test]
    fn test_scores_zero_outside_split() {
        let hist = hist_of(&[(100, 3), (150, 3)]);
        let scores = between_class_scores(&hist, 6, Precision::Double).unwrap();
        assert_eq!(scores[99], 0.0);
        assert!(scores[100] > 0.0);
        assert_eq!(scores[120], scores[100]);
        assert_eq!(scores[150], 0.0);
        assert_eq!(scores[255], 0.0);
    }

    #[test]
    fn test_precisions_agree_on_simple_histograms() {
        let cases = [
            hist_of(&[(50, 8), (200, 8)]),
            hist_of(&[(10, 2), (20, 2), (200, 4)]),
            hist_of(&[(0, 1000), (30, 10), (255, 500)]),
        ];
        for hist in &cases {
            let n = hist.total();
            let single = select_threshold_with(hist, n, &OtsuOptions::default()).unwrap();
            let double =
                select_threshold_with(hist, n, &OtsuOptions::with_precision(Precision::Double))
                    .unwrap();
            assert_eq!(single, double);
        }
    }
}

//! Regression test parameters and operations

use otsu_seg_core::{BinaryMask, logger};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Mismatches fail the test (default)
    #[default]
    Compare,
    /// Mismatches are printed but do not fail the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "otsu")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode (compare or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Reads `REGTEST_MODE` for the mode and installs the stderr logger at
    /// the level named by `REGTEST_LOG` (default `warn`).
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let level = std::env::var("REGTEST_LOG")
            .ok()
            .and_then(|s| logger::parse_level(&s))
            .unwrap_or(log::LevelFilter::Warn);
        // Another harness in the same binary may already own the logger.
        let _ = logger::init_with_level(level);

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        if self.mode == RegTestMode::Compare {
            self.success = false;
        }
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two masks for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the masks have the same dimensions and cells.
    pub fn compare_masks(&mut self, mask1: &BinaryMask, mask2: &BinaryMask) -> bool {
        self.index += 1;

        if !mask1.sizes_equal(mask2) {
            let msg = format!(
                "Failure in {}_reg: mask comparison for index {} - dimension mismatch \
                 ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                mask1.width(),
                mask1.height(),
                mask2.width(),
                mask2.height()
            );
            self.record_failure(msg);
            return false;
        }

        for y in 0..mask1.height() {
            for x in 0..mask1.width() {
                if mask1.get(x, y) != mask2.get(x, y) {
                    let msg = format!(
                        "Failure in {}_reg: mask comparison for index {} - cell mismatch at ({}, {})",
                        self.test_name, self.index, x, y
                    );
                    self.record_failure(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two byte strings
    ///
    /// # Returns
    ///
    /// `true` if data is identical, `false` otherwise.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}\n\
                 expected: {:?}\n\
                 actual:   {:?}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len(),
                String::from_utf8_lossy(data1),
                String::from_utf8_lossy(data2)
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed (or the mode is display),
    /// `false` otherwise.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare_params(name: &str) -> RegParams {
        let mut rp = RegParams::new(name);
        rp.mode = RegTestMode::Compare;
        rp
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = compare_params("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = compare_params("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = compare_params("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
        assert_eq!(rp.index(), 1);
    }

    #[test]
    fn test_display_mode_does_not_fail() {
        let mut rp = RegParams::new("test");
        rp.mode = RegTestMode::Display;
        assert!(!rp.compare_values(1.0, 2.0, 0.0));
        assert!(rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_masks() {
        let a = BinaryMask::from_predicate(2, 2, &[0, 1, 2, 3], |v| v > 1);
        let b = BinaryMask::from_predicate(2, 2, &[0, 1, 2, 3], |v| v > 0);
        let c = BinaryMask::from_predicate(4, 1, &[0, 1, 2, 3], |v| v > 1);

        let mut rp = compare_params("test");
        assert!(rp.compare_masks(&a, &a.clone()));
        assert!(!rp.compare_masks(&a, &b));
        assert!(!rp.compare_masks(&a, &c));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = compare_params("test");
        assert!(rp.compare_strings(b"abc", b"abc"));
        assert!(!rp.compare_strings(b"abc", b"abd"));
    }
}

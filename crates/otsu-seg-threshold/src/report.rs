//! Human-readable processing report

use std::fmt;

/// Summary of one segmentation run
///
/// Rendering through `Display` produces the plain-text log block that
/// accompanies saved masks. Where it gets written is up to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentationReport {
    /// Label for the processed image, usually its file name
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub threshold: u8,
    pub foreground_pixels: usize,
    pub background_pixels: usize,
    /// Affection ratio in [0, 1]
    pub ratio: f64,
}

impl SegmentationReport {
    /// Affection ratio as a percentage.
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

impl fmt::Display for SegmentationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Otsu Segmentation Report")?;
        writeln!(f, "========================")?;
        writeln!(f, "Image: {}", self.name)?;
        writeln!(f, "Dimensions: {}x{}", self.width, self.height)?;
        writeln!(f, "Threshold: {}", self.threshold)?;
        writeln!(f, "Foreground pixels: {}", self.foreground_pixels)?;
        writeln!(f, "Background pixels: {}", self.background_pixels)?;
        writeln!(f, "Probability of Affection: {:.2}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format() {
        let report = SegmentationReport {
            name: "scan.png".to_string(),
            width: 4,
            height: 2,
            threshold: 99,
            foreground_pixels: 3,
            background_pixels: 5,
            ratio: 0.375,
        };
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Otsu Segmentation Report");
        assert_eq!(lines[2], "Image: scan.png");
        assert_eq!(lines[3], "Dimensions: 4x2");
        assert_eq!(lines[4], "Threshold: 99");
        assert_eq!(lines[7], "Probability of Affection: 37.50%");
        assert!(text.ends_with('\n'));
    }
}

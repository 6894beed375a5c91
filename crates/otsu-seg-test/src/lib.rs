//! otsu-seg-test - Regression test framework for otsu-seg
//!
//! Each regression test creates a [`RegParams`], records numbered
//! comparisons, and asserts on [`RegParams::cleanup`]:
//!
//! ```ignore
//! use otsu_seg_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("otsu");
//! let buf = fixtures::bimodal(4, 4, 50, 200);
//! rp.compare_values(50.0, threshold as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "compare" (default) or "display"
//! - `REGTEST_LOG`: log level for library output ("warn" by default)

pub mod fixtures;
mod params;

pub use params::{RegParams, RegTestMode};

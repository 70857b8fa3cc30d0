//! regionfind-test - Regression test framework for regionfind
//!
//! Provides [`RegParams`], which counts comparisons and collects every
//! failure so a test reports all problems at once, plus builders for
//! synthetic frames.
//!
//! # Usage
//!
//! ```ignore
//! use regionfind_test::RegParams;
//!
//! let mut rp = RegParams::new("grow");
//! rp.compare_values(4.0, regions.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: "display" additionally writes images to `tests/regout`

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // regionfind-test is at crates/regionfind-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

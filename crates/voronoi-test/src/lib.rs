//! voronoi-test - Regression test framework for the voronoi workspace
//!
//! Tracks numbered checks inside one `*_reg` test and reports every
//! failure at the end instead of stopping at the first one. Two modes
//! are supported:
//!
//! - **Compare**: Run the checks (default)
//! - **Display**: Run the checks and also write intermediate images to
//!   `tests/regout` for visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use voronoi_test::RegParams;
//!
//! let mut rp = RegParams::new("voronoi");
//! rp.compare_values(1.0, skeleton.count_nonzero() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // voronoi-test is at crates/voronoi-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

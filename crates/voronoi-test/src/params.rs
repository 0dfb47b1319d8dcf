//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::fixtures::mask_to_ascii;
use crate::regout_dir;
use std::fs;
use voronoi_core::{FPix, Pix};
use voronoi_io::ImageFormat;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Run the checks only (default)
    #[default]
    Compare,
    /// Run the checks and write intermediate images
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
    /// Name of the test (e.g., "voronoi")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        if mode == RegTestMode::Display {
            let _ = fs::create_dir_all(regout_dir());
        }

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
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
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

    /// Compare two 8 bpp or 32 bpp images pixel for pixel.
    ///
    /// On mismatch the failure records how many pixels differ.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;
        match pix1.count_pixel_diffs(pix2) {
            Ok(diff) if diff.n_diff == 0 => true,
            Ok(diff) => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - {} of {} pixels differ",
                    self.test_name,
                    self.index,
                    diff.n_diff,
                    pix1.width() as u64 * pix1.height() as u64
                );
                self.record_failure(msg);
                false
            }
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: pix comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.record_failure(msg);
                false
            }
        }
    }

    /// Compare two masks exactly; a mismatch dumps both as ASCII art.
    pub fn compare_fpix(&mut self, expected: &FPix, actual: &FPix) -> bool {
        self.index += 1;
        if expected == actual {
            return true;
        }
        let msg = format!(
            "Failure in {}_reg: mask comparison for index {}\nexpected {:?}:\n{}actual {:?}:\n{}",
            self.test_name,
            self.index,
            expected.dimensions(),
            mask_to_ascii(expected),
            actual.dimensions(),
            mask_to_ascii(actual)
        );
        self.record_failure(msg);
        false
    }

    /// Write a Pix to `tests/regout` when in display mode
    ///
    /// The file is named `<test>.<index>.<ext>`. Nothing is written in
    /// compare mode.
    pub fn write_pix_if_display(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        let local_path = format!(
            "{}/{}.{:02}.{}",
            regout_dir(),
            self.test_name,
            self.index,
            format.extension()
        );
        voronoi_io::write_image(pix, &local_path, format).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;
        eprintln!("Wrote: {}", local_path);
        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
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

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

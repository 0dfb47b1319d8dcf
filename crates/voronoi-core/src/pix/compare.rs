//! Image comparison operations
//!
//! The convergence checks of every skeletonization strategy reduce to
//! "did any pixel change", so this module provides exact equality and
//! a pixel difference count.

use super::Pix;
use crate::error::{Error, Result};

/// Result of counting pixel differences between two images
#[derive(Debug, Clone)]
pub struct PixelDiffResult {
    /// Number of pixels that differ
    pub n_diff: u64,
    /// Fraction of pixels that differ (0.0 to 1.0)
    pub fract_diff: f64,
}

impl Pix {
    /// Count the number of pixels that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] or [`Error::DepthMismatch`]
    /// when the images do not share width, height and depth.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<PixelDiffResult> {
        check_same_shape(self, other)?;

        let w = self.width();
        let h = self.height();
        let mut n_diff = 0u64;
        for y in 0..h {
            for x in 0..w {
                if self.get_pixel_unchecked(x, y) != other.get_pixel_unchecked(x, y) {
                    n_diff += 1;
                }
            }
        }

        let total = w as u64 * h as u64;
        Ok(PixelDiffResult {
            n_diff,
            fract_diff: n_diff as f64 / total as f64,
        })
    }

    /// Check whether two images have identical shape and pixels.
    ///
    /// Padding bits beyond the row width are ignored.
    pub fn equals(&self, other: &Pix) -> bool {
        self.count_pixel_diffs(other)
            .map(|diff| diff.n_diff == 0)
            .unwrap_or(false)
    }
}

pub(crate) fn check_same_shape(a: &Pix, b: &Pix) -> Result<()> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(Error::SizeMismatch {
            expected: (a.width(), a.height()),
            actual: (b.width(), b.height()),
        });
    }
    if a.depth() != b.depth() {
        return Err(Error::DepthMismatch {
            expected: a.depth().bits(),
            actual: b.depth().bits(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelDepth;

    #[test]
    fn test_equals_and_diffs() {
        let a = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let mut bm = a.to_mut();
        bm.set_pixel(3, 3, 1).unwrap();
        bm.set_pixel(0, 1, 9).unwrap();
        let b: Pix = bm.into();

        let copy: Pix = a.to_mut().into();
        assert!(a.equals(&copy));
        assert!(!a.equals(&b));
        let diff = a.count_pixel_diffs(&b).unwrap();
        assert_eq!(diff.n_diff, 2);
        assert!((diff.fract_diff - 2.0 / 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let b = Pix::new(4, 5, PixelDepth::Bit8).unwrap();
        let c = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        assert!(a.count_pixel_diffs(&b).is_err());
        assert!(a.count_pixel_diffs(&c).is_err());
        assert!(!a.equals(&c));
    }
}

//! Pixel arithmetic on 8 bpp images
//!
//! The morphological skeleton accumulates per-scale residues with a
//! saturating subtraction followed by a bitwise OR.

use super::compare::check_same_shape;
use super::{Pix, PixelDepth};
use crate::error::{Error, Result};

fn check_8bpp(pix: &Pix) -> Result<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(Error::UnsupportedDepth(pix.depth().bits()));
    }
    Ok(())
}

impl Pix {
    /// Per-pixel `max(self - other, 0)`.
    pub fn subtract_saturating(&self, other: &Pix) -> Result<Pix> {
        check_8bpp(self)?;
        check_same_shape(self, other)?;

        let w = self.width();
        let h = self.height();
        let mut out = self.create_template().try_into_mut().unwrap();
        for y in 0..h {
            for x in 0..w {
                let a = self.get_pixel_unchecked(x, y);
                let b = other.get_pixel_unchecked(x, y);
                out.set_pixel_unchecked(x, y, a.saturating_sub(b));
            }
        }
        Ok(out.into())
    }

    /// Per-pixel bitwise OR.
    pub fn or(&self, other: &Pix) -> Result<Pix> {
        check_8bpp(self)?;
        check_same_shape(self, other)?;

        let data: Vec<u32> = self
            .data()
            .iter()
            .zip(other.data())
            .map(|(a, b)| a | b)
            .collect();
        let mut out = self.create_template().try_into_mut().unwrap();
        out.data_mut().copy_from_slice(&data);
        Ok(out.into())
    }
}

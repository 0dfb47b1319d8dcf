//! Border ring operations
//!
//! Thinning reads the 8-neighborhood of every interior pixel, so the
//! outermost ring of a mask has to be background before any pass runs.
//! These helpers clear that ring in place and check it afterwards.
//!
//! Degenerate images (width or height below 2) are accepted: every
//! pixel then lies on the ring and the result is entirely background.

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

impl PixMut {
    /// Set row 0, row h-1, column 0 and column w-1 to background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] unless the image is 8 bpp;
    /// the ring is only meaningful on single-channel masks.
    pub fn clear_border_ring(&mut self) -> Result<()> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let w = self.width();
        let h = self.height();
        for x in 0..w {
            self.set_pixel_unchecked(x, 0, 0);
            self.set_pixel_unchecked(x, h - 1, 0);
        }
        for y in 0..h {
            self.set_pixel_unchecked(0, y, 0);
            self.set_pixel_unchecked(w - 1, y, 0);
        }
        Ok(())
    }
}

impl Pix {
    /// Return a copy with the outer ring cleared to background.
    pub fn with_border_cleared(&self) -> Result<Pix> {
        let mut pm = self.to_mut();
        pm.clear_border_ring()?;
        Ok(pm.into())
    }

    /// Check whether every pixel of the outer ring is background.
    pub fn border_is_clear(&self) -> bool {
        let w = self.width();
        let h = self.height();
        (0..w).all(|x| self.get_pixel_unchecked(x, 0) == 0 && self.get_pixel_unchecked(x, h - 1) == 0)
            && (0..h).all(|y| {
                self.get_pixel_unchecked(0, y) == 0 && self.get_pixel_unchecked(w - 1, y) == 0
            })
    }
}

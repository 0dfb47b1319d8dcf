//! Pixel statistics

use super::Pix;

impl Pix {
    /// Count the foreground (nonzero) pixels.
    ///
    /// For 32 bpp images a pixel counts when any color sample is nonzero;
    /// the alpha byte is ignored.
    pub fn count_pixels(&self) -> u64 {
        let w = self.width();
        let h = self.height();
        let mask = match self.depth() {
            super::PixelDepth::Bit8 => 0xff,
            super::PixelDepth::Bit32 => 0xffff_ff00,
        };
        let mut count = 0u64;
        for y in 0..h {
            for x in 0..w {
                if self.get_pixel_unchecked(x, y) & mask != 0 {
                    count += 1;
                }
            }
        }
        count
    }
}

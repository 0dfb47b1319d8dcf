//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//!
//! # Pixel packing
//!
//! Pixels are packed MSB-to-LSB within each 32-bit word. In an 8-bit
//! image, pixel 0 occupies bits 31..24 of the first word of its row.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn read_word_pixel(data: &[u32], wpl: u32, depth: PixelDepth, x: u32, y: u32) -> u32 {
    let line = &data[(y * wpl) as usize..((y + 1) * wpl) as usize];
    match depth {
        PixelDepth::Bit8 => get_data_byte(line, x),
        PixelDepth::Bit32 => line[x as usize],
    }
}

#[inline]
fn write_word_pixel(data: &mut [u32], wpl: u32, depth: PixelDepth, x: u32, y: u32, val: u32) {
    let line = &mut data[(y * wpl) as usize..((y + 1) * wpl) as usize];
    match depth {
        PixelDepth::Bit8 => set_data_byte(line, x, val),
        PixelDepth::Bit32 => line[x as usize] = val,
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the image width.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` lies beyond the row's words.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_word_pixel(self.data(), self.wpl(), self.depth(), x, y)
    }

    /// Get RGB values at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking against the image width.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        read_word_pixel(self.data(), self.wpl(), self.depth(), x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// Values wider than the depth are masked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PixelOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking against the image width.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height` or `x` lies beyond the row's words.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let wpl = self.wpl();
        let depth = self.depth();
        write_word_pixel(self.data_mut(), wpl, depth, x, y, val);
    }

    /// Set an RGB pixel at (x, y).
    ///
    /// Only valid for 32-bit images.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}

/// Get an 8-bit pixel value.
#[inline]
pub fn get_data_byte(line: &[u32], x: u32) -> u32 {
    let word = line[(x >> 2) as usize];
    let shift = 24 - 8 * (x & 3);
    (word >> shift) & 0xff
}

/// Set an 8-bit pixel value.
#[inline]
pub fn set_data_byte(line: &mut [u32], x: u32, val: u32) {
    let word = &mut line[(x >> 2) as usize];
    let shift = 24 - 8 * (x & 3);
    *word = (*word & !(0xff << shift)) | ((val & 0xff) << shift);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_packing_msb_first() {
        let mut line = [0u32; 2];
        set_data_byte(&mut line, 0, 0xAB);
        set_data_byte(&mut line, 3, 0x01);
        set_data_byte(&mut line, 4, 0xFF);
        assert_eq!(line[0], 0xAB00_0001);
        assert_eq!(line[1], 0xFF00_0000);
        assert_eq!(get_data_byte(&line, 0), 0xAB);
        assert_eq!(get_data_byte(&line, 1), 0);
        assert_eq!(get_data_byte(&line, 4), 0xFF);
    }

    #[test]
    fn test_set_get_pixel_8bpp() {
        let pix = Pix::new(7, 3, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel(6, 2, 200).unwrap();
        pm.set_pixel(5, 2, 300).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(6, 2), Some(200));
        assert_eq!(pix.get_pixel(5, 2), Some(300 & 0xff));
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(7, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        assert!(pm.set_pixel(2, 0, 1).is_err());
        assert!(pm.set_pixel(0, 2, 1).is_err());
    }

    #[test]
    fn test_rgb_access() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(1, 1, 255, 128, 0).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(1, 1), Some((255, 128, 0)));
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_set_rgb_rejects_gray() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        assert!(pm.set_rgb(0, 0, 1, 2, 3).is_err());
    }
}

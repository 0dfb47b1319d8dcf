//! FPix - Floating-point image
//!
//! `FPix` is a 2D array of `f32` values. The thinning passes work on
//! `FPix` masks whose pixels are exactly `0.0` (background) or `1.0`
//! (foreground), bit-compatible with an 8 bpp mask thresholded to 0/1.
//!
//! # Examples
//!
//! ```
//! use voronoi_core::FPix;
//!
//! let mut fpix = FPix::new(100, 100).unwrap();
//! fpix.set_pixel(10, 20, 1.0).unwrap();
//! assert_eq!(fpix.get_pixel(10, 20).unwrap(), 1.0);
//! assert_eq!(fpix.count_nonzero(), 1);
//! ```

use crate::error::{Error, Result};
use crate::pix::{Pix, PixelDepth};

/// How to handle negative values when converting FPix to Pix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeHandling {
    /// Clip negative values to zero
    #[default]
    ClipToZero,
    /// Take the absolute value
    TakeAbsValue,
}

/// Floating-point image
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<f32>,
}

impl FPix {
    /// Create a new FPix with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(FPix {
            width,
            height,
            data: vec![0.0f32; size],
        })
    }

    /// Create a FPix from raw data
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions are invalid or data length doesn't match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let expected_size = (width as usize) * (height as usize);
        if data.len() != expected_size {
            return Err(Error::InvalidParameter(format!(
                "data length {} doesn't match {}x{} = {}",
                data.len(),
                width,
                height,
                expected_size
            )));
        }

        Ok(FPix {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::PixelOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get_pixel_unchecked(x, y))
    }

    /// Set the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::PixelOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::PixelOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.set_pixel_unchecked(x, y, value);
        Ok(())
    }

    /// Get the pixel value at signed coordinates, `0.0` outside the image.
    ///
    /// Neighborhood reads at the image edge go through this accessor so
    /// that a pixel beyond the frame is always background.
    #[inline]
    pub fn get_pixel_or_zero(&self, x: i64, y: i64) -> f32 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 0.0;
        }
        self.get_pixel_unchecked(x as u32, y as u32)
    }

    /// Get the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx]
    }

    /// Set the pixel value at (x, y) without bounds checking
    ///
    /// # Panics
    ///
    /// Panics if the computed index is outside the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get a row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let start = (y as usize) * (self.width as usize);
        let end = start + (self.width as usize);
        &self.data[start..end]
    }

    /// Create a template FPix with the same dimensions, zeroed data.
    pub fn create_template(&self) -> FPix {
        FPix {
            width: self.width,
            height: self.height,
            data: vec![0.0; self.data.len()],
        }
    }

    /// Set row 0, row h-1, column 0 and column w-1 to `0.0`.
    pub fn clear_border_ring(&mut self) {
        let w = self.width;
        let h = self.height;
        for x in 0..w {
            self.set_pixel_unchecked(x, 0, 0.0);
            self.set_pixel_unchecked(x, h - 1, 0.0);
        }
        for y in 0..h {
            self.set_pixel_unchecked(0, y, 0.0);
            self.set_pixel_unchecked(w - 1, y, 0.0);
        }
    }

    /// Count pixels whose value is not `0.0`.
    pub fn count_nonzero(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0.0).count() as u64
    }

    /// Check that every pixel is exactly `0.0` or `1.0`.
    pub fn is_binary(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0 || v == 1.0)
    }

    /// Multiply all pixels by a constant (in-place)
    pub fn mul_constant(&mut self, value: f32) {
        for v in &mut self.data {
            *v *= value;
        }
    }

    // ========================================================================
    // Conversion from / to Pix
    // ========================================================================

    /// Create a FPix from a Pix
    ///
    /// - 8 bpp: direct conversion to f32 (a 0/1 mask stays 0.0/1.0)
    /// - 32 bpp: luminance `0.299 R + 0.587 G + 0.114 B`
    pub fn from_pix(pix: &Pix) -> Result<Self> {
        let width = pix.width();
        let height = pix.height();
        let mut fpix = FPix::new(width, height)?;

        for y in 0..height {
            for x in 0..width {
                let raw = pix.get_pixel_unchecked(x, y);
                let val = match pix.depth() {
                    PixelDepth::Bit8 => raw as f32,
                    PixelDepth::Bit32 => {
                        let r = ((raw >> 24) & 0xff) as f32;
                        let g = ((raw >> 16) & 0xff) as f32;
                        let b = ((raw >> 8) & 0xff) as f32;
                        0.299 * r + 0.587 * g + 0.114 * b
                    }
                };
                fpix.set_pixel_unchecked(x, y, val);
            }
        }

        Ok(fpix)
    }

    /// Convert FPix to an 8 bpp Pix
    ///
    /// Values are rounded to nearest and clamped to `0..=255`; negative
    /// values are handled per `neg_handling`.
    pub fn to_pix(&self, neg_handling: NegativeHandling) -> Result<Pix> {
        let pix = Pix::new(self.width, self.height, PixelDepth::Bit8)?;
        let mut pix_mut = pix.try_into_mut().unwrap();

        for y in 0..self.height {
            for x in 0..self.width {
                let fval = self.get_pixel_unchecked(x, y);
                let fval = if fval < 0.0 {
                    match neg_handling {
                        NegativeHandling::ClipToZero => 0.0,
                        NegativeHandling::TakeAbsValue => fval.abs(),
                    }
                } else {
                    fval
                };
                let ival = ((fval + 0.5) as u32).min(255);
                pix_mut.set_pixel_unchecked(x, y, ival);
            }
        }

        Ok(pix_mut.into())
    }
}

//! Pixel depth and channel conversions
//!
//! The skeletonization front end always runs the same two steps:
//! 3-channel color to 8-bit luminance, then a fixed binary threshold.
//! [`Pix::convert_to_rgb`] normalizes other decoded inputs (gray,
//! RGBA) into the 3-channel form the front end accepts.

use super::{Pix, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Fractional bits of the fixed-point luminance weights
pub const LUMA_SHIFT: u32 = 14;
/// Luminance weight of the red channel, `0.299 << 14`
pub const RED_WEIGHT: u32 = 4899;
/// Luminance weight of the green channel, `0.587 << 14`
pub const GREEN_WEIGHT: u32 = 9617;
/// Luminance weight of the blue channel, `0.114 << 14`
pub const BLUE_WEIGHT: u32 = 1868;

/// Byte order of the three color samples in a 32-bit pixel.
///
/// Frames captured as BGR keep blue in the most significant color slot.
/// Camera frames usually arrive that way; files decoded by `voronoi-io`
/// are RGB, which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChannelOrder {
    /// Red in the most significant slot
    #[default]
    Rgb,
    /// Blue in the most significant slot
    Bgr,
}

impl ChannelOrder {
    /// Weights applied to the (msb, middle, lsb) color slots.
    fn slot_weights(self) -> (u32, u32, u32) {
        match self {
            ChannelOrder::Rgb => (RED_WEIGHT, GREEN_WEIGHT, BLUE_WEIGHT),
            ChannelOrder::Bgr => (BLUE_WEIGHT, GREEN_WEIGHT, RED_WEIGHT),
        }
    }
}

impl Pix {
    /// Convert a 32 bpp color image to 8 bpp luminance.
    ///
    /// Uses `0.299 R + 0.587 G + 0.114 B` in 14-bit fixed point, rounded
    /// to nearest, with the slot-to-channel mapping given by `order`. The
    /// weights sum to exactly `1 << 14`, so neutral colors keep their
    /// level and the result never exceeds 255. Alpha is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 32 bpp.
    pub fn convert_rgb_to_gray(&self, order: ChannelOrder) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        let (w0, w1, w2) = order.slot_weights();

        let w = self.width();
        let h = self.height();
        let result = Pix::new(w, h, PixelDepth::Bit8)?;
        let mut result_mut = result.try_into_mut().unwrap();

        for y in 0..h {
            for x in 0..w {
                let (s0, s1, s2) = color::extract_rgb(self.get_pixel_unchecked(x, y));
                let sum = w0 * s0 as u32 + w1 * s1 as u32 + w2 * s2 as u32;
                let gray = (sum + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT;
                result_mut.set_pixel_unchecked(x, y, gray);
            }
        }

        Ok(result_mut.into())
    }

    /// Apply a fixed binary threshold to an 8 bpp image.
    ///
    /// Pixels strictly greater than `thresh` become `maxval`, all others 0.
    /// `maxval` is 1 for masks feeding the float thinning passes and 255
    /// for masks feeding the 8-bit strategies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if the image is not 8 bpp, and
    /// [`Error::InvalidParameter`] if `maxval` is 0.
    pub fn threshold_binary(&self, thresh: u8, maxval: u8) -> Result<Pix> {
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        if maxval == 0 {
            return Err(Error::InvalidParameter(
                "threshold maxval must be nonzero".into(),
            ));
        }

        let w = self.width();
        let h = self.height();
        let result = Pix::new(w, h, PixelDepth::Bit8)?;
        let mut result_mut = result.try_into_mut().unwrap();

        for y in 0..h {
            for x in 0..w {
                if self.get_pixel_unchecked(x, y) > thresh as u32 {
                    result_mut.set_pixel_unchecked(x, y, maxval as u32);
                }
            }
        }

        Ok(result_mut.into())
    }

    /// Normalize an image to 3-channel 32 bpp.
    ///
    /// - 8 bpp gray is replicated into all three channels
    /// - 32 bpp RGBA drops its alpha (set opaque) and reports spp = 3
    /// - 32 bpp RGB is returned as a shared clone
    pub fn convert_to_rgb(&self) -> Result<Pix> {
        match (self.depth(), self.spp()) {
            (PixelDepth::Bit32, 3) => Ok(self.clone()),
            (PixelDepth::Bit32, _) => {
                let mut pm = self.to_mut();
                pm.set_spp(3);
                for word in pm.data_mut().iter_mut() {
                    *word |= 0xff << color::ALPHA_SHIFT;
                }
                Ok(pm.into())
            }
            (PixelDepth::Bit8, _) => {
                let w = self.width();
                let h = self.height();
                let result = Pix::new(w, h, PixelDepth::Bit32)?;
                let mut result_mut = result.try_into_mut().unwrap();
                for y in 0..h {
                    for x in 0..w {
                        let g = self.get_pixel_unchecked(x, y) as u8;
                        result_mut.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                    }
                }
                Ok(result_mut.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_pixel(r: u8, g: u8, b: u8) -> Pix {
        let pix = Pix::new(1, 1, PixelDepth::Bit32).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(0, 0, r, g, b).unwrap();
        pm.into()
    }

    #[test]
    fn test_rgb_to_gray_weights() {
        let white = rgb_pixel(255, 255, 255)
            .convert_rgb_to_gray(ChannelOrder::Rgb)
            .unwrap();
        assert_eq!(white.get_pixel(0, 0), Some(255));

        let red = rgb_pixel(255, 0, 0)
            .convert_rgb_to_gray(ChannelOrder::Rgb)
            .unwrap();
        assert_eq!(red.get_pixel(0, 0), Some(76));
    }

    #[test]
    fn test_rgb_to_gray_bgr_order() {
        // Under BGR the most significant slot carries blue
        let pix = rgb_pixel(255, 0, 0);
        let gray = pix.convert_rgb_to_gray(ChannelOrder::Bgr).unwrap();
        assert_eq!(gray.get_pixel(0, 0), Some(29));
    }

    #[test]
    fn test_rgb_to_gray_fixed_point_levels() {
        // Neutral levels around the default threshold stay exact
        for level in [126u8, 127, 128] {
            let gray = rgb_pixel(level, level, level)
                .convert_rgb_to_gray(ChannelOrder::Rgb)
                .unwrap();
            assert_eq!(gray.get_pixel(0, 0), Some(level as u32));
        }
        // 0.299*22 + 0.587*206 is exactly 127.5, but the 14-bit weights
        // sum to 127.99 and truncate, so this green stays background
        let green = rgb_pixel(22, 206, 0);
        let gray = green.convert_rgb_to_gray(ChannelOrder::Rgb).unwrap();
        assert_eq!(gray.get_pixel(0, 0), Some(127));
        assert_eq!(gray.threshold_binary(127, 1).unwrap().count_pixels(), 0);
        // 0.299*255 + 0.587*100 = 134.9
        let gray = rgb_pixel(255, 100, 0)
            .convert_rgb_to_gray(ChannelOrder::Rgb)
            .unwrap();
        assert_eq!(gray.get_pixel(0, 0), Some(135));
    }

    #[test]
    fn test_rgb_to_gray_rejects_gray_input() {
        let pix = Pix::new(2, 2, PixelDepth::Bit8).unwrap();
        assert!(pix.convert_rgb_to_gray(ChannelOrder::Rgb).is_err());
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let pix = Pix::new(3, 1, PixelDepth::Bit8).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_pixel(0, 0, 127).unwrap();
        pm.set_pixel(1, 0, 128).unwrap();
        pm.set_pixel(2, 0, 255).unwrap();
        let pix: Pix = pm.into();

        let mask = pix.threshold_binary(127, 1).unwrap();
        assert_eq!(mask.get_pixel(0, 0), Some(0));
        assert_eq!(mask.get_pixel(1, 0), Some(1));
        assert_eq!(mask.get_pixel(2, 0), Some(1));

        let mask = pix.threshold_binary(127, 255).unwrap();
        assert_eq!(mask.get_pixel(1, 0), Some(255));
        assert!(pix.threshold_binary(127, 0).is_err());
    }

    #[test]
    fn test_convert_to_rgb() {
        let gray = Pix::new(2, 1, PixelDepth::Bit8).unwrap();
        let mut pm = gray.try_into_mut().unwrap();
        pm.set_pixel(1, 0, 90).unwrap();
        let gray: Pix = pm.into();
        let rgb = gray.convert_to_rgb().unwrap();
        assert_eq!(rgb.spp(), 3);
        assert_eq!(rgb.get_rgb(1, 0), Some((90, 90, 90)));

        let mut rgba = Pix::new(1, 1, PixelDepth::Bit32).unwrap().to_mut();
        rgba.set_spp(4);
        rgba.set_pixel(0, 0, color::compose_rgba(1, 2, 3, 0)).unwrap();
        let rgba: Pix = rgba.into();
        let rgb = rgba.convert_to_rgb().unwrap();
        assert_eq!(rgb.spp(), 3);
        assert_eq!(rgb.get_rgb(0, 0), Some((1, 2, 3)));
    }
}

//! Grayscale morphological operations
//!
//! Implements erosion and dilation of 8-bpp images with an arbitrary
//! structuring element.
//!
//! # Algorithm
//!
//! - **Dilation**: maximum pixel value over the SEL hits
//! - **Erosion**: minimum pixel value over the SEL hits
//!
//! Hits that fall outside the image are skipped, so the frame behaves
//! as neither foreground nor background. A 0/255 mask with a clear
//! border erodes and dilates exactly like its binary counterpart.

use crate::{MorphError, MorphResult, Sel};
use voronoi_core::{Pix, PixelDepth};

fn check_grayscale(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(MorphError::UnsupportedDepth {
            expected: "8-bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

fn rank_filter(pix: &Pix, sel: &Sel, pick: fn(u32, u32) -> u32, init: u32) -> MorphResult<Pix> {
    check_grayscale(pix)?;
    if sel.hit_count() == 0 {
        return Err(MorphError::InvalidSel("SEL has no hits".to_string()));
    }

    let w = pix.width() as i32;
    let h = pix.height() as i32;
    let offsets: Vec<(i32, i32)> = sel.hit_offsets().collect();
    let mut out = pix.create_template().try_into_mut().unwrap();

    for y in 0..h {
        for x in 0..w {
            let mut acc = init;
            let mut seen = false;
            for &(dx, dy) in &offsets {
                let (sx, sy) = (x + dx, y + dy);
                if sx >= 0 && sy >= 0 && sx < w && sy < h {
                    acc = pick(acc, pix.get_pixel_unchecked(sx as u32, sy as u32));
                    seen = true;
                }
            }
            if !seen {
                // every hit fell off-image
                acc = pix.get_pixel_unchecked(x as u32, y as u32);
            }
            out.set_pixel_unchecked(x as u32, y as u32, acc);
        }
    }

    Ok(out.into())
}

/// Dilate a grayscale image
///
/// Dilation computes the maximum pixel value in the SEL neighborhood,
/// which expands bright regions and shrinks dark regions.
pub fn dilate_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    rank_filter(pix, sel, u32::max, 0)
}

/// Erode a grayscale image
///
/// Erosion computes the minimum pixel value in the SEL neighborhood,
/// which shrinks bright regions and expands dark regions.
pub fn erode_gray(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    rank_filter(pix, sel, u32::min, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> Pix {
        let mut pm = Pix::new(w, h, PixelDepth::Bit8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in y0..=y1 {
            for x in x0..=x1 {
                pm.set_pixel_unchecked(x, y, 255);
            }
        }
        pm.into()
    }

    #[test]
    fn test_erode_cross_shrinks_square() {
        let cross = Sel::create_cross(3).unwrap();
        let pix = square(7, 7, 2, 2, 4, 4);
        let eroded = erode_gray(&pix, &cross).unwrap();
        assert_eq!(eroded.count_pixels(), 1);
        assert_eq!(eroded.get_pixel(3, 3), Some(255));
    }

    #[test]
    fn test_dilate_cross_grows_point() {
        let cross = Sel::create_cross(3).unwrap();
        let pix = square(5, 5, 2, 2, 2, 2);
        let dilated = dilate_gray(&pix, &cross).unwrap();
        assert_eq!(dilated.count_pixels(), 5);
        assert_eq!(dilated.get_pixel(1, 1), Some(0));
        assert_eq!(dilated.get_pixel(2, 1), Some(255));
    }

    #[test]
    fn test_edges_ignore_outside() {
        // A full image stays full under erosion: outside hits are skipped
        let cross = Sel::create_cross(3).unwrap();
        let pix = square(3, 3, 0, 0, 2, 2);
        let eroded = erode_gray(&pix, &cross).unwrap();
        assert_eq!(eroded.count_pixels(), 9);
    }

    #[test]
    fn test_rejects_rgb() {
        let cross = Sel::create_cross(3).unwrap();
        let pix = Pix::new(3, 3, PixelDepth::Bit32).unwrap();
        assert!(erode_gray(&pix, &cross).is_err());
        assert!(dilate_gray(&pix, &cross).is_err());
    }
}

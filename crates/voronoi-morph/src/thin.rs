//! Zhang–Suen thinning
//!
//! Reduces a binary image to a 1-pixel wide skeleton with the parallel
//! two-subiteration scheme of:
//!
//! "A fast parallel algorithm for thinning digital patterns"
//! T. Y. Zhang and C. Y. Suen, Communications of the ACM 27(3), 1984.
//!
//! # Algorithm
//!
//! With the neighbors labelled clockwise from north as `p2..p9`:
//!
//! ```text
//!   p9 p2 p3
//!   p8 p1 p4
//!   p7 p6 p5
//! ```
//!
//! a pixel is marked when
//! - `A(p1) == 1` (one 0 → 1 transition around `p2, p3, .., p9, p2`),
//! - `2 <= B(p1) <= 6` (occupied neighbors),
//! - sub-iteration 0: `p2·p4·p6 == 0` and `p4·p6·p8 == 0`,
//! - sub-iteration 1: `p2·p4·p8 == 0` and `p2·p6·p8 == 0`.
//!
//! Marked pixels are cleared after each sub-iteration. Only pixels with
//! all eight neighbors inside the image are examined.

use crate::{MorphError, MorphResult};
use log::debug;
use voronoi_core::{Pix, PixelDepth};

/// Unpack an 8 bpp image to a row-major 0/1 grid.
fn to_grid(pix: &Pix) -> Vec<u8> {
    let w = pix.width();
    let h = pix.height();
    let mut grid = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            grid.push((pix.get_pixel_unchecked(x, y) != 0) as u8);
        }
    }
    grid
}

/// Run one sub-iteration in place; returns the number of cleared pixels.
fn thinning_iteration(grid: &mut [u8], w: usize, h: usize, iter: u8) -> u64 {
    let mut marker = vec![0u8; grid.len()];
    let mut marked = 0u64;

    for i in 1..h.saturating_sub(1) {
        for j in 1..w.saturating_sub(1) {
            let at = |di: isize, dj: isize| -> u8 {
                grid[(i as isize + di) as usize * w + (j as isize + dj) as usize]
            };
            if at(0, 0) == 0 {
                continue;
            }
            let p2 = at(-1, 0);
            let p3 = at(-1, 1);
            let p4 = at(0, 1);
            let p5 = at(1, 1);
            let p6 = at(1, 0);
            let p7 = at(1, -1);
            let p8 = at(0, -1);
            let p9 = at(-1, -1);

            let ring = [p2, p3, p4, p5, p6, p7, p8, p9, p2];
            let a = ring.windows(2).filter(|s| s[0] == 0 && s[1] == 1).count();
            let b: u8 = ring[..8].iter().sum();
            let (m1, m2) = if iter == 0 {
                (p2 * p4 * p6, p4 * p6 * p8)
            } else {
                (p2 * p4 * p8, p2 * p6 * p8)
            };

            if a == 1 && (2..=6).contains(&b) && m1 == 0 && m2 == 0 {
                marker[i * w + j] = 1;
                marked += 1;
            }
        }
    }

    for (px, m) in grid.iter_mut().zip(&marker) {
        *px &= !m;
    }
    marked
}

/// Thin an 8 bpp binary image with Zhang–Suen.
///
/// Any nonzero pixel is foreground. The result is 0/255.
///
/// # Arguments
///
/// * `pix` - 8-bpp binary image
/// * `max_iters` - Maximum number of iterations (0 = until convergence)
pub fn thin_zhang_suen(pix: &Pix, max_iters: u32) -> MorphResult<Pix> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(MorphError::UnsupportedDepth {
            expected: "8-bpp",
            actual: pix.depth().bits(),
        });
    }

    let w = pix.width() as usize;
    let h = pix.height() as usize;
    let mut grid = to_grid(pix);
    let mut iterations = 0u32;

    loop {
        let removed = thinning_iteration(&mut grid, w, h, 0) + thinning_iteration(&mut grid, w, h, 1);
        iterations += 1;
        if removed == 0 {
            break;
        }
        if max_iters > 0 && iterations >= max_iters {
            debug!("zhang-suen stopped at {} iterations", iterations);
            break;
        }
    }
    debug!("zhang-suen thinning finished after {} iterations", iterations);

    let mut out = pix.create_template().try_into_mut().unwrap();
    for y in 0..h {
        for x in 0..w {
            if grid[y * w + x] != 0 {
                out.set_pixel_unchecked(x as u32, y as u32, 255);
            }
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_rows(rows: &[&str]) -> Pix {
        let w = rows[0].len() as u32;
        let h = rows.len() as u32;
        let mut pm = Pix::new(w, h, PixelDepth::Bit8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for (y, r) in rows.iter().enumerate() {
            for (x, c) in r.bytes().enumerate() {
                if c == b'#' {
                    pm.set_pixel_unchecked(x as u32, y as u32, 255);
                }
            }
        }
        pm.into()
    }

    #[test]
    fn test_thin_bar_to_line() {
        let pix = from_rows(&[
            "............",
            ".##########.",
            ".##########.",
            ".##########.",
            "............",
        ]);
        let out = thin_zhang_suen(&pix, 0).unwrap();
        // every remaining pixel lies on the middle row
        for y in [0, 1, 3, 4] {
            for x in 0..12 {
                assert_eq!(out.get_pixel(x, y), Some(0), "({x}, {y})");
            }
        }
        assert!(out.count_pixels() >= 6);
    }

    #[test]
    fn test_thin_line_is_fixed_point() {
        let pix = from_rows(&["........", ".######.", "........"]);
        let out = thin_zhang_suen(&pix, 0).unwrap();
        assert!(out.equals(&pix));
    }

    #[test]
    fn test_output_is_0_255() {
        let mut pm = Pix::new(5, 5, PixelDepth::Bit8)
            .unwrap()
            .try_into_mut()
            .unwrap();
        pm.set_pixel(2, 2, 1).unwrap();
        let out = thin_zhang_suen(&pm.into(), 0).unwrap();
        assert_eq!(out.get_pixel(2, 2), Some(255));
    }

    #[test]
    fn test_max_iters_limits_work() {
        let pix = from_rows(&[
            "..........",
            ".########.",
            ".########.",
            ".########.",
            ".########.",
            ".########.",
            ".########.",
            "..........",
        ]);
        let one = thin_zhang_suen(&pix, 1).unwrap();
        let full = thin_zhang_suen(&pix, 0).unwrap();
        assert!(one.count_pixels() >= full.count_pixels());
        assert!(one.count_pixels() < pix.count_pixels());
    }

    #[test]
    fn test_rejects_rgb() {
        let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        assert!(thin_zhang_suen(&pix, 0).is_err());
    }
}

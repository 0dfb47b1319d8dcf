//! Synthetic masks and frames for regression tests
//!
//! ASCII art uses `#` for foreground and any other character for
//! background. All rows must have the same length.

use voronoi_core::{FPix, Pix, PixelDepth, color};

/// Simple LCG random number generator for reproducible tests
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 33) as u32
    }

    /// Uniform value in `0..bound`
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

fn ascii_dims(rows: &[&str]) -> (u32, u32) {
    let h = rows.len() as u32;
    let w = rows.first().map_or(0, |r| r.len()) as u32;
    assert!(
        rows.iter().all(|r| r.len() as u32 == w),
        "ragged ASCII fixture"
    );
    (w, h)
}

/// Build a 0/1 `FPix` mask from ASCII art.
pub fn mask_from_ascii(rows: &[&str]) -> FPix {
    let (w, h) = ascii_dims(rows);
    let mut mask = FPix::new(w, h).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.bytes().enumerate() {
            if c == b'#' {
                mask.set_pixel_unchecked(x as u32, y as u32, 1.0);
            }
        }
    }
    mask
}

/// Build an 8 bpp `Pix` from ASCII art with foreground set to `value`.
pub fn pix_from_ascii(rows: &[&str], value: u32) -> Pix {
    let (w, h) = ascii_dims(rows);
    let mut pm = Pix::new(w, h, PixelDepth::Bit8)
        .unwrap()
        .try_into_mut()
        .unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.bytes().enumerate() {
            if c == b'#' {
                pm.set_pixel_unchecked(x as u32, y as u32, value);
            }
        }
    }
    pm.into()
}

/// Build a 3-channel frame from ASCII art: white foreground on black.
pub fn rgb_from_ascii(rows: &[&str]) -> Pix {
    rgb_from_mask(&mask_from_ascii(rows))
}

/// Paint a 0/1 mask as a 3-channel frame: white foreground on black.
pub fn rgb_from_mask(mask: &FPix) -> Pix {
    let mut pm = Pix::new(mask.width(), mask.height(), PixelDepth::Bit32)
        .unwrap()
        .try_into_mut()
        .unwrap();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let v = if mask.get_pixel_unchecked(x, y) != 0.0 { 255 } else { 0 };
            pm.set_pixel_unchecked(x, y, color::compose_rgb(v, v, v));
        }
    }
    pm.into()
}

/// Render a mask back to ASCII art, for failure messages.
pub fn mask_to_ascii(mask: &FPix) -> String {
    let mut out = String::new();
    for y in 0..mask.height() {
        for &v in mask.row(y) {
            out.push(if v != 0.0 { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

/// Filled rectangle mask, corners inclusive.
pub fn rect_mask(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> FPix {
    let mut mask = FPix::new(w, h).unwrap();
    for y in y0..=y1 {
        for x in x0..=x1 {
            mask.set_pixel_unchecked(x, y, 1.0);
        }
    }
    mask
}

/// Random 0/1 mask with about `percent` % foreground and a clear border.
pub fn random_mask(w: u32, h: u32, percent: u32, rng: &mut SimpleRng) -> FPix {
    let mut mask = FPix::new(w, h).unwrap();
    for y in 0..h {
        for x in 0..w {
            if rng.below(100) < percent {
                mask.set_pixel_unchecked(x, y, 1.0);
            }
        }
    }
    mask.clear_border_ring();
    mask
}

/// Random blobby mask: a union of filled rectangles, border clear.
///
/// Produces thick shapes whose skeletons are more interesting than
/// those of salt-and-pepper noise.
pub fn random_blobs(w: u32, h: u32, count: u32, rng: &mut SimpleRng) -> FPix {
    let mut mask = FPix::new(w, h).unwrap();
    for _ in 0..count {
        let x0 = rng.below(w);
        let y0 = rng.below(h);
        let x1 = (x0 + 1 + rng.below(w / 2 + 1)).min(w - 1);
        let y1 = (y0 + 1 + rng.below(h / 2 + 1)).min(h - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                mask.set_pixel_unchecked(x, y, 1.0);
            }
        }
    }
    mask.clear_border_ring();
    mask
}

/// Convert a 0/1 mask to an 8 bpp `Pix` with foreground `value`.
pub fn mask_to_pix(mask: &FPix, value: u32) -> Pix {
    let mut pm = Pix::new(mask.width(), mask.height(), PixelDepth::Bit8)
        .unwrap()
        .try_into_mut()
        .unwrap();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            if mask.get_pixel_unchecked(x, y) != 0.0 {
                pm.set_pixel_unchecked(x, y, value);
            }
        }
    }
    pm.into()
}

/// Count connected components of pixels equal to `foreground`.
///
/// `eight` selects 8-connectivity, otherwise 4-connectivity.
fn count_regions(mask: &FPix, foreground: bool, eight: bool) -> u32 {
    let w = mask.width() as i64;
    let h = mask.height() as i64;
    let inside = |x: i64, y: i64| (mask.get_pixel_or_zero(x, y) != 0.0) == foreground;
    let mut seen = vec![false; (w * h) as usize];
    let mut regions = 0;

    for y in 0..h {
        for x in 0..w {
            if seen[(y * w + x) as usize] || !inside(x, y) {
                continue;
            }
            regions += 1;
            seen[(y * w + x) as usize] = true;
            let mut stack = vec![(x, y)];
            while let Some((cx, cy)) = stack.pop() {
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        if (dx == 0 && dy == 0) || (!eight && dx != 0 && dy != 0) {
                            continue;
                        }
                        let (nx, ny) = (cx + dx, cy + dy);
                        if nx < 0 || ny < 0 || nx >= w || ny >= h {
                            continue;
                        }
                        let idx = (ny * w + nx) as usize;
                        if !seen[idx] && inside(nx, ny) {
                            seen[idx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }
    regions
}

/// Number of 8-connected foreground components.
pub fn count_components(mask: &FPix) -> u32 {
    count_regions(mask, true, true)
}

/// Number of holes: 4-connected background components not counting the
/// outer background. Assumes the border ring is background.
pub fn count_holes(mask: &FPix) -> u32 {
    count_regions(mask, false, false).saturating_sub(1)
}

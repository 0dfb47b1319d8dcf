//! Sub-iteration passes of the Voronoi thinning
//!
//! One outer thinning iteration is pass A followed by pass B. Each pass
//! scans `1 <= y < h`, `1 <= x < w` in raster order, classifies every
//! foreground pixel of its input with [`Neighborhood`], and clears the
//! removable ones in a separate output image. Decisions only ever see
//! the pre-pass input, so the scan order does not matter.

use crate::neighborhood::Neighborhood;
use log::trace;
use voronoi_core::FPix;

/// Which of the two sub-iterations to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Peels the north and east facing boundary; protects pixels whose corner
    /// guard `(N | NE | !SE) & E` is set.
    A,
    /// Peels the south and west facing boundary; protects pixels whose corner
    /// guard `(S | SW | !NW) & W` is set.
    B,
}

/// Run one sub-iteration over `input`, returning a fresh image.
///
/// `input` is never modified. Row 0 and column 0 are not visited.
pub fn thin_pass(input: &FPix, pass: Pass) -> FPix {
    let mut output = input.clone();
    let mut removed = 0u64;

    for y in 1..input.height() {
        for x in 1..input.width() {
            if input.get_pixel_unchecked(x, y) == 0.0 {
                continue;
            }
            if Neighborhood::read(input, x, y).is_removable(pass) {
                output.set_pixel_unchecked(x, y, 0.0);
                removed += 1;
            }
        }
    }

    trace!("pass {:?}: removed {} pixels", pass, removed);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> FPix {
        let h = rows.len() as u32;
        let w = rows[0].len() as u32;
        let data = rows
            .iter()
            .flat_map(|r| r.bytes().map(|c| if c == b'#' { 1.0 } else { 0.0 }))
            .collect();
        FPix::from_data(w, h, data).unwrap()
    }

    #[test]
    fn test_pass_does_not_touch_input() {
        let input = mask(&[".....", ".###.", ".###.", ".###.", "....."]);
        let before = input.clone();
        let _ = thin_pass(&input, Pass::A);
        assert_eq!(input, before);
    }

    #[test]
    fn test_passes_only_remove() {
        let input = mask(&[
            "........",
            ".######.",
            ".######.",
            ".######.",
            "........",
        ]);
        for pass in [Pass::A, Pass::B] {
            let out = thin_pass(&input, pass);
            for (a, b) in input.data().iter().zip(out.data()) {
                assert!(*b <= *a);
            }
            assert!(out.count_nonzero() < input.count_nonzero());
        }
    }

    #[test]
    fn test_pass_a_on_square() {
        // Pass A peels the north row and the east column of a 3x3 block
        let input = mask(&[".....", ".###.", ".###.", ".###.", "....."]);
        let out = thin_pass(&input, Pass::A);
        let expected = mask(&[".....", ".....", ".##..", ".##..", "....."]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_single_line_is_stable() {
        let input = mask(&["......", ".####.", "......"]);
        assert_eq!(thin_pass(&input, Pass::A), input);
        assert_eq!(thin_pass(&input, Pass::B), input);
    }
}

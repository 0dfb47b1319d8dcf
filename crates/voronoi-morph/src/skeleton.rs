//! Morphological-residue skeleton
//!
//! Builds a skeleton from the residues of repeated erosion with a 3×3
//! cross:
//!
//! ```text
//! skel := 0
//! do:
//!     eroded  := erode(img)
//!     residue := img - dilate(eroded)      (saturating)
//!     skel    := skel | residue
//!     img     := eroded
//! while img has foreground
//! ```
//!
//! Each residue is the part of the current image that an opening would
//! remove, i.e. the ridge that disappears at this scale. The union over
//! all scales is the skeleton. Unlike thinning, the result need not be
//! connected.

use crate::grayscale::{dilate_gray, erode_gray};
use crate::voronoi::Convergence;
use crate::{MorphError, MorphResult, Sel};
use log::{debug, warn};
use voronoi_core::{Pix, PixelDepth};

/// Result of [`morph_skeleton`]
#[derive(Debug, Clone)]
pub struct ResidueSkeleton {
    /// 8 bpp skeleton, same size as the input
    pub skeleton: Pix,
    /// Erosion rounds run
    pub iterations: u32,
    pub convergence: Convergence,
}

/// Skeletonize an 8 bpp binary image by erosion residues.
///
/// At least one round always runs. Foreground touching the image edge
/// never erodes away, so the default cap of `max(width, height) + 1`
/// rounds ends the loop; reaching it reports
/// [`Convergence::DidNotConverge`].
///
/// # Errors
///
/// Returns [`MorphError::UnsupportedDepth`] for non-8 bpp input and
/// [`MorphError::InvalidParameters`] when `max_iterations` is `Some(0)`.
pub fn morph_skeleton(pix: &Pix, max_iterations: Option<u32>) -> MorphResult<ResidueSkeleton> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(MorphError::UnsupportedDepth {
            expected: "8-bpp",
            actual: pix.depth().bits(),
        });
    }
    let cap = match max_iterations {
        Some(0) => {
            return Err(MorphError::InvalidParameters(
                "max_iterations must be positive".to_string(),
            ));
        }
        Some(n) => n,
        None => pix.width().max(pix.height()) + 1,
    };

    let element = Sel::create_cross(3)?;
    let mut img = pix.clone();
    let mut skel = pix.create_template();
    let mut iterations = 0u32;

    let convergence = loop {
        let eroded = erode_gray(&img, &element)?;
        let opened = dilate_gray(&eroded, &element)?;
        let residue = img.subtract_saturating(&opened)?;
        skel = skel.or(&residue)?;
        img = eroded;
        iterations += 1;

        if img.count_pixels() == 0 {
            break Convergence::Converged;
        }
        if iterations == cap {
            warn!(
                "morphological skeleton stopped at cap of {} rounds, {} pixels left to erode",
                cap,
                img.count_pixels()
            );
            break Convergence::DidNotConverge;
        }
    };

    debug!(
        "morphological skeleton {:?} after {} rounds: {} pixels",
        convergence,
        iterations,
        skel.count_pixels()
    );

    Ok(ResidueSkeleton {
        skeleton: skel,
        iterations,
        convergence,
    })
}

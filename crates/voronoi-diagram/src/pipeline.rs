//! Frame-to-skeleton entry points
//!
//! Every strategy runs the same front end on a 3-channel frame:
//!
//! 1. color to 8-bit luminance (channel order from the options)
//! 2. fixed threshold: pixels above `threshold` become foreground
//! 3. border ring cleared to background
//!
//! and then hands the mask to its skeletonizer. The custom thinning
//! works on a 0/1 float mask, the two others on 0/255 8-bit masks.

use crate::error::{DiagramError, DiagramResult};
use crate::options::{DiagramOptions, SkeletonOptions, Strategy, ThinningOptions, VoronoiOptions};
use log::debug;
use voronoi_core::{ChannelOrder, FPix, NegativeHandling, Pix, PixelDepth};
use voronoi_morph::{VoronoiThinning, make_voronoi, morph_skeleton, thin_zhang_suen};

/// Channels a frame must carry
pub const FRAME_CHANNELS: u32 = 3;

/// Outcome of [`voronoi`]: the 0/1 skeleton plus iteration statistics.
pub type VoronoiResult = VoronoiThinning;

/// Skeleton produced by [`run`]
#[derive(Debug, Clone)]
pub enum Skeleton {
    /// 0/1 float mask from the custom thinning
    Mask(FPix),
    /// 0/255 8 bpp image from the two alternative strategies
    Binary(Pix),
}

impl Skeleton {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Skeleton::Mask(mask) => mask.dimensions(),
            Skeleton::Binary(pix) => (pix.width(), pix.height()),
        }
    }

    /// Number of skeleton pixels.
    pub fn foreground_count(&self) -> u64 {
        match self {
            Skeleton::Mask(mask) => mask.count_nonzero(),
            Skeleton::Binary(pix) => pix.count_pixels(),
        }
    }

    /// Render as an 8 bpp image with foreground 255.
    pub fn to_pix(&self) -> DiagramResult<Pix> {
        match self {
            Skeleton::Mask(mask) => {
                let mut scaled = mask.clone();
                scaled.mul_constant(255.0);
                Ok(scaled.to_pix(NegativeHandling::ClipToZero)?)
            }
            Skeleton::Binary(pix) => Ok(pix.clone()),
        }
    }
}

/// Reject frames that are not non-empty 3-channel images.
fn check_frame(pix: &Pix) -> DiagramResult<()> {
    if pix.width() == 0 || pix.height() == 0 {
        return Err(DiagramError::InvalidImageShape {
            width: pix.width(),
            height: pix.height(),
        });
    }
    let channels = match pix.depth() {
        PixelDepth::Bit8 => 1,
        PixelDepth::Bit32 => pix.spp(),
    };
    if channels != FRAME_CHANNELS {
        return Err(DiagramError::ChannelMismatch {
            expected: FRAME_CHANNELS,
            actual: channels,
        });
    }
    Ok(())
}

/// Gray, threshold to `0/maxval`, clear the border ring.
fn binarize(pix: &Pix, threshold: u8, order: ChannelOrder, maxval: u8) -> DiagramResult<Pix> {
    check_frame(pix)?;
    let gray = pix.convert_rgb_to_gray(order)?;
    let mask = gray.threshold_binary(threshold, maxval)?;
    Ok(mask.with_border_cleared()?)
}

/// Thin a frame to its Voronoi skeleton.
///
/// The result is a 0/1 [`FPix`] of the frame's size. Hitting the
/// iteration cap is reported in the result, not as an error.
///
/// # Errors
///
/// [`DiagramError::InvalidImageShape`] for empty frames and
/// [`DiagramError::ChannelMismatch`] for anything but 3-channel input.
pub fn voronoi(pix: &Pix, options: &VoronoiOptions) -> DiagramResult<VoronoiResult> {
    let mask = binarize(pix, options.threshold, options.channel_order, 1)?;
    let mask = FPix::from_pix(&mask)?;
    let result = make_voronoi(&mask, options.max_iterations)?;
    debug!(
        "voronoi: {}x{} frame, {} -> {} pixels in {} iterations",
        pix.width(),
        pix.height(),
        mask.count_nonzero(),
        result.skeleton.count_nonzero(),
        result.iterations
    );
    Ok(result)
}

/// Thin a frame with Zhang–Suen. Returns an 8 bpp 0/255 image.
///
/// # Errors
///
/// Same input checks as [`voronoi`].
pub fn thinning(pix: &Pix, options: &ThinningOptions) -> DiagramResult<Pix> {
    let mask = binarize(pix, options.threshold, options.channel_order, 255)?;
    let skeleton = thin_zhang_suen(&mask, options.max_iterations)?;
    debug!(
        "thinning: {}x{} frame, {} -> {} pixels",
        pix.width(),
        pix.height(),
        mask.count_pixels(),
        skeleton.count_pixels()
    );
    Ok(skeleton)
}

/// Skeletonize a frame by erosion residues. Returns an 8 bpp 0/255
/// image.
///
/// # Errors
///
/// Same input checks as [`voronoi`].
pub fn skeletonize(pix: &Pix, options: &SkeletonOptions) -> DiagramResult<Pix> {
    let mask = binarize(pix, options.threshold, options.channel_order, 255)?;
    let result = morph_skeleton(&mask, options.max_iterations)?;
    debug!(
        "skeleton: {}x{} frame, {} -> {} pixels in {} rounds",
        pix.width(),
        pix.height(),
        mask.count_pixels(),
        result.skeleton.count_pixels(),
        result.iterations
    );
    Ok(result.skeleton)
}

/// Run the selected strategy with its options from `options`.
pub fn run(strategy: Strategy, pix: &Pix, options: &DiagramOptions) -> DiagramResult<Skeleton> {
    match strategy {
        Strategy::Voronoi => Ok(Skeleton::Mask(voronoi(pix, &options.voronoi)?.skeleton)),
        Strategy::Thinning => Ok(Skeleton::Binary(thinning(pix, &options.thinning)?)),
        Strategy::Skeleton => Ok(Skeleton::Binary(skeletonize(pix, &options.skeleton)?)),
    }
}

//! Two-pass thinning to a Voronoi skeleton
//!
//! Repeats pass A followed by pass B until an outer iteration leaves the
//! mask unchanged. The result is a 1-pixel-wide, connectivity-preserving
//! skeleton whose lines run along the medial axis of each region, which
//! is what a navigation graph over free space is built from.
//!
//! # Algorithm
//!
//! ```text
//! working := mask
//! loop:
//!     candidate := B(A(working))
//!     if candidate == working: CONVERGED
//!     working := candidate
//! ```
//!
//! Every iteration before the last removes at least one pixel, so the
//! loop runs at most `foreground + 1` times. That bound is the default
//! safety cap; a smaller cap may be configured, in which case the last
//! working buffer is returned together with [`Convergence::DidNotConverge`].

use crate::subiteration::{Pass, thin_pass};
use crate::{MorphError, MorphResult};
use log::{debug, warn};
use voronoi_core::FPix;

/// How an iterative skeletonizer stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// An iteration changed nothing
    Converged,
    /// The iteration cap was reached first
    DidNotConverge,
}

impl Convergence {
    pub fn is_converged(self) -> bool {
        self == Convergence::Converged
    }
}

/// Result of [`make_voronoi`]
#[derive(Debug, Clone)]
pub struct VoronoiThinning {
    /// 0.0/1.0 skeleton, same size as the input
    pub skeleton: FPix,
    /// Outer iterations run, including the final no-change one
    pub iterations: u32,
    pub convergence: Convergence,
}

/// Thin a 0/1 mask to its Voronoi skeleton.
///
/// The mask is expected to have a clear border ring; callers sanitize
/// it first. `max_iterations` overrides the default cap of
/// `foreground + 1` outer iterations.
///
/// # Errors
///
/// Returns [`MorphError::InvalidParameters`] if the mask holds values
/// other than 0.0 and 1.0, or if `max_iterations` is `Some(0)`.
pub fn make_voronoi(mask: &FPix, max_iterations: Option<u32>) -> MorphResult<VoronoiThinning> {
    if !mask.is_binary() {
        return Err(MorphError::InvalidParameters(
            "thinning mask must contain only 0.0 and 1.0".to_string(),
        ));
    }
    let foreground = mask.count_nonzero();
    let cap = match max_iterations {
        Some(0) => {
            return Err(MorphError::InvalidParameters(
                "max_iterations must be positive".to_string(),
            ));
        }
        Some(n) => n,
        None => u32::try_from(foreground + 1).unwrap_or(u32::MAX),
    };

    let mut working = mask.clone();
    let mut iterations = 0u32;

    let convergence = loop {
        if iterations == cap {
            warn!(
                "voronoi thinning stopped at cap of {} iterations, {} pixels remain",
                cap,
                working.count_nonzero()
            );
            break Convergence::DidNotConverge;
        }

        let intermediate = thin_pass(&working, Pass::A);
        let candidate = thin_pass(&intermediate, Pass::B);
        iterations += 1;

        if candidate == working {
            break Convergence::Converged;
        }
        debug!(
            "voronoi iteration {}: {} -> {} pixels",
            iterations,
            working.count_nonzero(),
            candidate.count_nonzero()
        );
        working = candidate;
    };

    debug!(
        "voronoi thinning {:?} after {} iterations: {} of {} pixels kept",
        convergence,
        iterations,
        working.count_nonzero(),
        foreground
    );

    Ok(VoronoiThinning {
        skeleton: working,
        iterations,
        convergence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: u32, h: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> FPix {
        let mut m = FPix::new(w, h).unwrap();
        for y in y0..=y1 {
            for x in x0..=x1 {
                m.set_pixel(x, y, 1.0).unwrap();
            }
        }
        m
    }

    #[test]
    fn test_empty_mask_converges_immediately() {
        let mask = FPix::new(5, 5).unwrap();
        let out = make_voronoi(&mask, None).unwrap();
        assert_eq!(out.iterations, 1);
        assert!(out.convergence.is_converged());
        assert_eq!(out.skeleton, mask);
    }

    #[test]
    fn test_square_reduces_to_center() {
        let mask = rect(7, 7, 2, 2, 4, 4);
        let out = make_voronoi(&mask, None).unwrap();
        assert!(out.convergence.is_converged());
        assert_eq!(out.skeleton.count_nonzero(), 1);
        assert_eq!(out.skeleton.get_pixel(3, 3).unwrap(), 1.0);
    }

    #[test]
    fn test_cap_reports_did_not_converge() {
        let mask = rect(12, 12, 1, 1, 10, 10);
        let out = make_voronoi(&mask, Some(1)).unwrap();
        assert_eq!(out.iterations, 1);
        assert_eq!(out.convergence, Convergence::DidNotConverge);
        assert!(out.skeleton.count_nonzero() < mask.count_nonzero());
    }

    #[test]
    fn test_rejects_bad_input() {
        let gray = FPix::from_data(3, 1, vec![0.0, 255.0, 0.0]).unwrap();
        assert!(make_voronoi(&gray, None).is_err());
        let mask = FPix::new(3, 3).unwrap();
        assert!(make_voronoi(&mask, Some(0)).is_err());
    }
}

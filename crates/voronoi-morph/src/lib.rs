//! voronoi-morph - Skeletonization of binary images
//!
//! This crate provides the three skeletonizers of the workspace and the
//! building blocks they share:
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Grayscale erosion and dilation for 8-bpp images
//! - The 8-neighborhood classifier and the two sub-iteration passes
//! - Two-pass thinning to a Voronoi skeleton ([`make_voronoi`])
//! - Zhang–Suen thinning ([`thin_zhang_suen`])
//! - Morphological-residue skeleton ([`morph_skeleton`])

mod error;
pub mod grayscale;
pub mod neighborhood;
pub mod sel;
pub mod skeleton;
pub mod subiteration;
pub mod thin;
pub mod voronoi;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use grayscale::{dilate_gray, erode_gray};
pub use neighborhood::Neighborhood;
pub use skeleton::{ResidueSkeleton, morph_skeleton};
pub use subiteration::{Pass, thin_pass};
pub use thin::thin_zhang_suen;
pub use voronoi::{Convergence, VoronoiThinning, make_voronoi};

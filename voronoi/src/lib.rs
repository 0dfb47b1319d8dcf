//! Voronoi - Topological skeletonization of binary images
//!
//! Reduces the filled regions of a binary image, such as the free space
//! of a floor-plan occupancy map, to a 1-pixel-wide skeleton from which
//! a Voronoi-style navigation graph can be read off.
//!
//! # Overview
//!
//! - Image containers and pixel helpers (re-exported at the root)
//! - Image I/O for PNG and PNM ([`io`])
//! - Thinning and morphological skeletons on masks ([`morph`])
//! - Frame-to-skeleton entry points and options ([`diagram`])
//!
//! # Example
//!
//! ```
//! use voronoi::diagram::{VoronoiOptions, voronoi};
//! use voronoi::{Pix, PixelDepth, color};
//!
//! // White 3x3 square in the middle of a black 7x7 frame
//! let mut frame = Pix::new(7, 7, PixelDepth::Bit32).unwrap().to_mut();
//! for y in 2..5 {
//!     for x in 2..5 {
//!         frame.set_pixel(x, y, color::compose_rgb(255, 255, 255)).unwrap();
//!     }
//! }
//! let result = voronoi(&frame.into(), &VoronoiOptions::default()).unwrap();
//! assert_eq!(result.skeleton.count_nonzero(), 1);
//! assert_eq!(result.skeleton.get_pixel(3, 3).unwrap(), 1.0);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use voronoi_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use voronoi_diagram as diagram;
pub use voronoi_io as io;
pub use voronoi_morph as morph;

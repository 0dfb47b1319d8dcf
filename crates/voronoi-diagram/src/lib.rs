//! voronoi-diagram - Skeletons of 3-channel frames
//!
//! Three interchangeable strategies share one front end (gray,
//! threshold, border clear) and return an image of the frame's size:
//!
//! - [`voronoi`] - two-pass thinning, 0/1 [`voronoi_core::FPix`]
//! - [`thinning`] - Zhang–Suen thinning, 0/255 8 bpp
//! - [`skeletonize`] - morphological residues, 0/255 8 bpp
//!
//! [`run`] dispatches on a [`Strategy`]. Each call is independent and
//! keeps no state.
//!
//! # Example
//!
//! ```
//! use voronoi_core::{Pix, PixelDepth};
//! use voronoi_diagram::{DiagramOptions, Strategy, run};
//!
//! let frame = Pix::new(16, 16, PixelDepth::Bit32).unwrap();
//! let skeleton = run(Strategy::Voronoi, &frame, &DiagramOptions::default()).unwrap();
//! assert_eq!(skeleton.dimensions(), (16, 16));
//! ```

pub mod collaborators;
mod error;
pub mod options;
pub mod pipeline;

pub use collaborators::{
    ControlMode, DecisionEngine, Frame, FrameSink, InputVariable, OutputVariable, SkeletonSink,
};
pub use error::{DiagramError, DiagramResult};
pub use options::{
    DEFAULT_THRESHOLD, DiagramOptions, SkeletonOptions, Strategy, ThinningOptions, VoronoiOptions,
    load_options,
};
pub use pipeline::{Skeleton, VoronoiResult, run, skeletonize, thinning, voronoi};
pub use voronoi_morph::Convergence;

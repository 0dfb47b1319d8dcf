//! Error types for voronoi-core

use thiserror::Error;

/// Errors raised by the image containers and pixel helpers
#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is zero
    #[error("image must be at least 1x1, got {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Pixel coordinate outside the image
    #[error("pixel ({x}, {y}) outside {width}x{height} image")]
    PixelOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two images that must be the same size are not
    #[error("size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Two images that must share a depth do not
    #[error("depth mismatch: expected {expected} bpp, got {actual} bpp")]
    DepthMismatch { expected: u32, actual: u32 },

    /// Operation not defined at this pixel depth
    #[error("unsupported pixel depth: {0} bpp")]
    UnsupportedDepth(u32),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for voronoi-core operations
pub type Result<T> = std::result::Result<T, Error>;

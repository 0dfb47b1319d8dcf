//! Error types for voronoi-diagram

use thiserror::Error;

/// Errors raised by the skeletonization entry points
#[derive(Debug, Error)]
pub enum DiagramError {
    /// Input frame has a zero dimension
    #[error("invalid image shape: {width}x{height}")]
    InvalidImageShape { width: u32, height: u32 },

    /// Input frame does not carry the expected number of channels
    #[error("channel mismatch: expected {expected} channels, got {actual}")]
    ChannelMismatch { expected: u32, actual: u32 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voronoi_core::Error),

    /// Skeletonizer error
    #[error("morph error: {0}")]
    Morph(#[from] voronoi_morph::MorphError),

    /// Options file could not be read
    #[error("failed to read options {path}: {source}")]
    OptionsRead {
        path: String,
        source: std::io::Error,
    },

    /// Options file could not be parsed
    #[error("failed to parse options {path}: {source}")]
    OptionsParse {
        path: String,
        source: serde_json::Error,
    },
}

/// Result type for the skeletonization entry points
pub type DiagramResult<T> = Result<T, DiagramError>;

//! Error types for voronoi-morph

use thiserror::Error;

/// Errors raised by the skeletonizers and their building blocks
#[derive(Debug, Error)]
pub enum MorphError {
    #[error("core error: {0}")]
    Core(#[from] voronoi_core::Error),

    /// Structuring element is malformed or has no hits
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Input is not at the depth the operation works on
    #[error("unsupported depth: expected {expected}, got {actual} bpp")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Mask is not binary, or an iteration cap is zero
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

pub type MorphResult<T> = Result<T, MorphError>;

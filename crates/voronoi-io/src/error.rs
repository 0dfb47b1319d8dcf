//! I/O error types

use thiserror::Error;

/// Error type for reading and writing images.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format not recognized, or its feature is disabled
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Header or payload is malformed
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The PNG decoder rejected the stream
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder failed
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Building the decoded image failed
    #[error("image error: {0}")]
    Core(#[from] voronoi_core::Error),
}

/// Result type for image I/O.
pub type IoResult<T> = Result<T, IoError>;

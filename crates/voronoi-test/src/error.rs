//! Errors of the regression harness

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// An inspection image could not be written in display mode
    #[error("failed to write inspection image '{path}': {message}")]
    ImageWrite { path: String, message: String },
}

pub type TestResult<T> = Result<T, TestError>;

//! Error types for progress rendering and timing.

use thiserror::Error;

/// Errors surfaced by [`ProgressRenderer`](crate::utils::progress::ProgressRenderer).
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProgressError>;

//! Error Types

use thiserror::Error;

/// Errors surfaced by the sorting core
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SortbenchError {
    /// Input rejected before any algorithm ran (e.g. a zero stress size).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An algorithm name that matches no known entry.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A stress size above the configured ceiling.
    #[error("Requested size {size} exceeds the maximum of {max}")]
    SizeLimitExceeded {
        /// Requested sequence length
        size: usize,
        /// Configured ceiling
        max: usize,
    },
}

/// Result alias for core operations
pub type Result<T> = std::result::Result<T, SortbenchError>;

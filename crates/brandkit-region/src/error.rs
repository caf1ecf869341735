//! Error types for brandkit-region

use brandkit_core::Rgba;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] brandkit_core::Error),

    /// The replacement color is itself matched by the predicate
    #[error("target color {} satisfies the match predicate", .0.to_hex())]
    TargetMatchesPredicate(Rgba),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

//! Error types for brandkit-icon

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while cleaning logos and generating icons
#[derive(Debug, Error)]
pub enum IconError {
    /// Image codec error
    #[error("image I/O error: {0}")]
    Io(#[from] brandkit_io::IoError),

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] brandkit_core::Error),

    /// Region fill error
    #[error("region error: {0}")]
    Region(#[from] brandkit_region::RegionError),

    /// Resampling error
    #[error("transform error: {0}")]
    Transform(#[from] brandkit_transform::TransformError),

    /// The source image does not exist
    #[error("source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Rejected brand configuration or icon set
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing or moving an output file failed
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for icon operations
pub type IconResult<T> = Result<T, IconError>;

//! brandkit-transform - Image resampling for brandkit
//!
//! This crate provides the resizing used to derive icon variants from a
//! master image:
//!
//! - Lanczos3 resampling on premultiplied alpha (default)
//! - Nearest-neighbor sampling
//! - Size targets that keep the aspect ratio when one side is 0

mod error;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use scale::{ScaleMethod, scale, scale_by_sampling, scale_to_size, scale_to_size_with};

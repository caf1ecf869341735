//! brandkit-region - Region processing for brandkit
//!
//! This crate provides:
//!
//! - **Color predicates** - Tolerance-based tests deciding region membership
//! - **Border-connected fill** - Recolor the matching region reachable from
//!   the image border, leaving enclosed matches untouched
//!
//! # Examples
//!
//! ```
//! use brandkit_region::{BrightnessThreshold, fill_border_connected};
//! use brandkit_core::{Pix, Rgba};
//!
//! // White 5x5 image with one dark pixel in the middle
//! let mut pm = Pix::new_filled(5, 5, Rgba::WHITE).unwrap().into_mut();
//! pm.set_pixel(2, 2, Rgba::BLACK).unwrap();
//!
//! let green = Rgba::rgb(17, 124, 50);
//! let count = fill_border_connected(&mut pm, &BrightnessThreshold::default(), green);
//! assert_eq!(count, 24);
//! assert_eq!(pm.get_pixel(2, 2), Some(Rgba::BLACK));
//! ```

pub mod border_fill;
pub mod error;
pub mod predicate;

// Re-export core types
pub use brandkit_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export predicate types
pub use predicate::{BrightnessThreshold, ColorPredicate, NearColor};

// Re-export border fill types and functions
pub use border_fill::{
    RegionMask, border_connected_mask, fill_border_connected, replace_border_connected,
};

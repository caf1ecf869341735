//! brandkit - Branding asset toolkit
//!
//! Cleans the near-white background out of a logo, then derives a full
//! family of web and app icons from it.
//!
//! # Overview
//!
//! - Image I/O (PNG, JPEG)
//! - Border-connected background replacement with tolerant color predicates
//! - Lanczos3 resampling with correct alpha handling
//! - Icon pipelines: fix, resize, compose, inspect
//!
//! # Example
//!
//! ```
//! use brandkit::region::{BrightnessThreshold, fill_border_connected};
//! use brandkit::{Pix, Rgba};
//!
//! let mut pm = Pix::new_filled(5, 5, Rgba::WHITE).unwrap().into_mut();
//! pm.set_pixel(2, 2, Rgba::BLACK).unwrap();
//!
//! let green = Rgba::rgb(17, 124, 50);
//! let n = fill_border_connected(&mut pm, &BrightnessThreshold::default(), green);
//! assert_eq!(n, 24);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use brandkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use brandkit_icon as icon;
pub use brandkit_io as io;
pub use brandkit_region as region;
pub use brandkit_transform as transform;

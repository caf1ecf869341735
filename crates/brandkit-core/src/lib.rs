//! brandkit Core - Basic data structures for branding image work
//!
//! This crate provides the fundamental data structures used throughout
//! brandkit:
//!
//! - [`Rgba`] - A 4-channel, 8-bit color
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - Alpha compositing, comparison and probing helpers on `Pix`

pub mod color;
pub mod error;
pub mod pix;

pub use color::Rgba;
pub use error::{Error, Result};
pub use pix::blend::over;
pub use pix::statistics::Probe;
pub use pix::{ImageFormat, Pix, PixMut, ProbePoint};

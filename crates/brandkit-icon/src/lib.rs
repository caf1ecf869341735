//! brandkit-icon - Logo cleanup and icon family generation
//!
//! # Pipelines
//!
//! - [`fix_icon`]: replace a logo's near-white background with the brand
//!   color, then write the master and every derived size
//! - [`resize_icons`]: resize a finished design to every target
//! - [`compose_icons`]: place a logo on a brand-colored canvas per target
//! - [`inspect_logo`]: probe colors and classify a logo's tone
//!
//! All pipelines render in memory first and write with [`write_rendered`],
//! so a failure leaves no partial family behind.
//!
//! # Example
//!
//! ```no_run
//! use brandkit_icon::{BrandConfig, IconSet, MASTER_ICON, fix_icon};
//!
//! let set = IconSet::standard("public").with_favicon();
//! let written = fix_icon(
//!     "public/logo.png",
//!     format!("public/{}", MASTER_ICON),
//!     &set,
//!     &BrandConfig::default(),
//! )?;
//! assert_eq!(written.len(), set.len());
//! # Ok::<(), brandkit_icon::IconError>(())
//! ```

pub mod config;
mod error;
pub mod icon_set;
pub mod inspect;
pub mod pipeline;

pub use config::{BrandConfig, OFFSET_REFERENCE};
pub use error::{IconError, IconResult};
pub use icon_set::{IconSet, IconTarget, MASTER_ICON, normalize_path};
pub use inspect::{LogoReport, Tone, inspect_logo};
pub use pipeline::{
    RenderedIcon, clean_logo, compose_icon, compose_icons, fix_icon, render_icon_set,
    resize_icons, write_rendered,
};

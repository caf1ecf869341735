//! Brand configuration

use crate::{IconError, IconResult};
use brandkit_core::Rgba;
use brandkit_region::{BrightnessThreshold, ColorPredicate};

/// Side length the logo offset is expressed against.
pub const OFFSET_REFERENCE: u32 = 1024;

/// Brand colors and logo placement shared by every pipeline step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrandConfig {
    /// Replacement color for the background and icon canvas
    pub brand_color: Rgba,
    /// A pixel is background when r, g and b all exceed this value
    pub white_threshold: u8,
    /// Logo width as a fraction of the icon width, in (0, 1]
    pub logo_fraction: f32,
    /// Logo displacement from center, in pixels of a 1024-wide icon
    pub logo_offset: (i32, i32),
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            brand_color: Rgba::rgb(17, 124, 50),
            white_threshold: 200,
            logo_fraction: 0.8,
            logo_offset: (0, 0),
        }
    }
}

impl BrandConfig {
    /// Create a config with the given brand color and default placement
    pub fn new(brand_color: Rgba) -> Self {
        Self {
            brand_color,
            ..Self::default()
        }
    }

    /// Set the brand color from a hex string such as `"#14532d"`
    pub fn with_brand_hex(mut self, hex: &str) -> IconResult<Self> {
        self.brand_color = Rgba::from_hex(hex)?;
        Ok(self)
    }

    /// Set the brand color
    pub fn with_brand_color(mut self, color: Rgba) -> Self {
        self.brand_color = color;
        self
    }

    /// Set the background brightness threshold
    pub fn with_white_threshold(mut self, threshold: u8) -> Self {
        self.white_threshold = threshold;
        self
    }

    /// Set the logo width fraction
    pub fn with_logo_fraction(mut self, fraction: f32) -> Self {
        self.logo_fraction = fraction;
        self
    }

    /// Set the logo offset
    pub fn with_logo_offset(mut self, dx: i32, dy: i32) -> Self {
        self.logo_offset = (dx, dy);
        self
    }

    /// The background predicate this config cleans with
    pub fn predicate(&self) -> BrightnessThreshold {
        BrightnessThreshold::new(self.white_threshold)
    }

    /// Logo offset scaled to an icon of the given width
    pub fn scaled_offset(&self, width: u32) -> (i32, i32) {
        let k = width as f64 / OFFSET_REFERENCE as f64;
        let (dx, dy) = self.logo_offset;
        ((dx as f64 * k).round() as i32, (dy as f64 * k).round() as i32)
    }

    /// Check the config before any pixel is touched.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidConfig`] if the brand color would itself
    /// count as background, or if the logo fraction is outside (0, 1].
    pub fn validate(&self) -> IconResult<()> {
        if self.predicate().matches(self.brand_color) {
            let msg = format!(
                "brand color {} is brighter than the white threshold {}",
                self.brand_color.to_hex(),
                self.white_threshold
            );
            log::warn!("rejected brand config: {}", msg);
            return Err(IconError::InvalidConfig(msg));
        }
        if !(self.logo_fraction > 0.0 && self.logo_fraction <= 1.0) {
            let msg = format!("logo fraction {} is outside (0, 1]", self.logo_fraction);
            log::warn!("rejected brand config: {}", msg);
            return Err(IconError::InvalidConfig(msg));
        }
        Ok(())
    }
}

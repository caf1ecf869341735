//! Color predicates
//!
//! A [`ColorPredicate`] decides whether a pixel belongs to the region being
//! filled. Predicates are pure: the answer depends only on the pixel value
//! passed in.
//!
//! Any `Fn(Rgba) -> bool` closure is a predicate. Two tolerance-based
//! predicates are provided for the common cases:
//!
//! - [`BrightnessThreshold`] - "near white": every color channel above a floor
//! - [`NearColor`] - within a per-channel distance of a reference color

use crate::error::{RegionError, RegionResult};
use brandkit_core::Rgba;

/// Tests whether a pixel is part of the region of interest.
pub trait ColorPredicate {
    /// Return `true` if `pixel` matches.
    fn matches(&self, pixel: Rgba) -> bool;
}

impl<F> ColorPredicate for F
where
    F: Fn(Rgba) -> bool,
{
    #[inline]
    fn matches(&self, pixel: Rgba) -> bool {
        self(pixel)
    }
}

/// Matches pixels whose red, green and blue channels all exceed `min`.
///
/// Alpha is ignored, so a half-transparent white still matches. The
/// default floor is 200 (~78% of full scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrightnessThreshold {
    /// Exclusive lower bound for each of R, G and B
    pub min: u8,
}

impl Default for BrightnessThreshold {
    fn default() -> Self {
        Self { min: 200 }
    }
}

impl BrightnessThreshold {
    /// Create a threshold with the given channel floor.
    pub fn new(min: u8) -> Self {
        Self { min }
    }

    /// Create a threshold from a fraction of full scale.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] unless `0.0 <= fraction < 1.0`.
    pub fn from_fraction(fraction: f32) -> RegionResult<Self> {
        if !(0.0..1.0).contains(&fraction) {
            return Err(RegionError::InvalidParameters(format!(
                "brightness fraction must be in [0, 1), got {fraction}"
            )));
        }
        Ok(Self {
            min: (fraction * 255.0).round() as u8,
        })
    }
}

impl ColorPredicate for BrightnessThreshold {
    #[inline]
    fn matches(&self, pixel: Rgba) -> bool {
        pixel.r > self.min && pixel.g > self.min && pixel.b > self.min
    }
}

/// Matches pixels within `tolerance` of `reference` on every color channel.
///
/// The comparison is strict (`|c - ref| < tolerance`) and ignores alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearColor {
    pub reference: Rgba,
    pub tolerance: u8,
}

impl NearColor {
    /// Create a predicate around `reference`.
    pub fn new(reference: Rgba, tolerance: u8) -> Self {
        Self {
            reference,
            tolerance,
        }
    }
}

impl ColorPredicate for NearColor {
    #[inline]
    fn matches(&self, pixel: Rgba) -> bool {
        let r = self.reference;
        pixel.r.abs_diff(r.r) < self.tolerance
            && pixel.g.abs_diff(r.g) < self.tolerance
            && pixel.b.abs_diff(r.b) < self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_threshold() {
        let p = BrightnessThreshold::default();
        assert!(p.matches(Rgba::WHITE));
        assert!(p.matches(Rgba::new(201, 230, 255, 0)));
        assert!(!p.matches(Rgba::rgb(200, 255, 255)));
        assert!(!p.matches(Rgba::rgb(17, 124, 50)));
    }

    #[test]
    fn test_brightness_from_fraction() {
        assert_eq!(BrightnessThreshold::from_fraction(0.5).unwrap().min, 128);
        assert!(BrightnessThreshold::from_fraction(1.0).is_err());
        assert!(BrightnessThreshold::from_fraction(-0.1).is_err());
        assert!(BrightnessThreshold::from_fraction(f32::NAN).is_err());
    }

    #[test]
    fn test_near_color() {
        let p = NearColor::new(Rgba::rgb(128, 128, 128), 30);
        assert!(p.matches(Rgba::rgb(150, 110, 128)));
        assert!(!p.matches(Rgba::rgb(158, 128, 128)));
        assert!(p.matches(Rgba::new(128, 128, 128, 0)));
    }

    #[test]
    fn test_closure_predicate() {
        let opaque = |p: Rgba| p.a == 255;
        assert!(opaque.matches(Rgba::BLACK));
        assert!(!opaque.matches(Rgba::TRANSPARENT));
    }
}

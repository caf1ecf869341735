//! RGBA color record
//!
//! A pixel is four 8-bit channels. The packed form used by
//! [`Rgba::from_u32`] / [`Rgba::to_u32`] is `0xRRGGBBAA` (red in MSB,
//! alpha in LSB).

use crate::error::{Error, Result};

/// Shift amounts for the packed `0xRRGGBBAA` form
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// A 4-channel, 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack a `0xRRGGBBAA` word.
    #[inline]
    pub const fn from_u32(pixel: u32) -> Self {
        Self {
            r: ((pixel >> RED_SHIFT) & 0xff) as u8,
            g: ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            b: ((pixel >> BLUE_SHIFT) & 0xff) as u8,
            a: ((pixel >> ALPHA_SHIFT) & 0xff) as u8,
        }
    }

    /// Pack into a `0xRRGGBBAA` word.
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << RED_SHIFT)
            | ((self.g as u32) << GREEN_SHIFT)
            | ((self.b as u32) << BLUE_SHIFT)
            | ((self.a as u32) << ALPHA_SHIFT)
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Check whether the pixel is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Perceptual luminance, `0.299 R + 0.587 G + 0.114 B`, in `[0, 255]`.
    ///
    /// Alpha is ignored.
    #[inline]
    pub fn luminance(self) -> f32 {
        0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32
    }

    /// Parse a hex color.
    ///
    /// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa`, with or without the
    /// leading `#`. Colors without an alpha component are opaque.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for any other length or a non-hex
    /// digit.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(s.to_string());

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..i + 1], 16)
                .map(|v| v * 17)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }

    /// Format as `#rrggbbaa`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(c: [u8; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Rgba> for [u8; 4] {
    fn from(c: Rgba) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.

use super::{Pix, PixMut};
use crate::color::Rgba;
use crate::error::{Error, Result};

#[inline]
fn index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`, or `x >= width` on the last row.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.data()[index(self.width(), x, y)]
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Rgba {
        self.data()[index(self.width(), x, y)]
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: Rgba) -> Result<()> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`, or `x >= width` on the last row.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: Rgba) {
        let i = index(self.width(), x, y);
        self.data_mut()[i] = val;
    }

    /// Set every pixel to `val`.
    pub fn set_all(&mut self, val: Rgba) {
        self.data_mut().fill(val);
    }
}

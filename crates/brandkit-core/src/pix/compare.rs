//! Image comparison operations

use super::Pix;
use crate::error::{Error, Result};

impl Pix {
    /// Check whether two images have the same size and identical pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Count the number of pixels that differ between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }

    /// Largest per-channel absolute difference between two images.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn max_channel_diff(&self, other: &Pix) -> Result<u8> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .map(|(a, b)| {
                a.r.abs_diff(b.r)
                    .max(a.g.abs_diff(b.g))
                    .max(a.b.abs_diff(b.b))
                    .max(a.a.abs_diff(b.a))
            })
            .max()
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Pix, Rgba};

    #[test]
    fn test_equals_and_diffs() {
        let a = Pix::new_filled(3, 3, Rgba::WHITE).unwrap();
        let mut bm = a.to_mut();
        bm.set_pixel(1, 1, Rgba::rgb(250, 255, 255)).unwrap();
        let b: Pix = bm.into();

        assert!(a.equals(&a.clone()));
        assert!(!a.equals(&b));
        assert_eq!(a.count_pixel_diffs(&b).unwrap(), 1);
        assert_eq!(a.max_channel_diff(&b).unwrap(), 5);
    }

    #[test]
    fn test_size_mismatch() {
        let a = Pix::new(3, 3).unwrap();
        let b = Pix::new(3, 4).unwrap();
        assert!(!a.equals(&b));
        assert!(a.count_pixel_diffs(&b).is_err());
        assert!(a.max_channel_diff(&b).is_err());
    }
}

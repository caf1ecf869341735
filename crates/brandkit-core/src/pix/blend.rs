//! Alpha compositing
//!
//! Places one image over another using the source alpha as coverage
//! (Porter-Duff "source over").

use super::{Pix, PixMut};
use crate::color::Rgba;

/// Composite a single source pixel over a destination pixel.
///
/// Straight (non-premultiplied) alpha on both sides.
#[inline]
pub fn over(src: Rgba, dst: Rgba) -> Rgba {
    match src.a {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let sa = src.a as f32 / 255.0;
    let da = dst.a as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba::TRANSPARENT;
    }

    let mix = |s: u8, d: u8| -> u8 {
        let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        (v + 0.5).clamp(0.0, 255.0) as u8
    };

    Rgba::new(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        (out_a * 255.0 + 0.5).clamp(0.0, 255.0) as u8,
    )
}

impl PixMut {
    /// Composite `src` over this image with its top-left corner at `(x, y)`.
    ///
    /// The offset may be negative and `src` may overhang any edge; only the
    /// overlapping area is touched.
    pub fn composite_over(&mut self, src: &Pix, x: i32, y: i32) {
        let dw = self.width() as i64;
        let dh = self.height() as i64;
        let sw = src.width() as i64;
        let sh = src.height() as i64;

        let x0 = (x as i64).max(0);
        let y0 = (y as i64).max(0);
        let x1 = (x as i64 + sw).min(dw);
        let y1 = (y as i64 + sh).min(dh);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for dy in y0..y1 {
            let sy = (dy - y as i64) as u32;
            let src_row = src.row_data(sy);
            let dst_row = self.row_data_mut(dy as u32);
            for dx in x0..x1 {
                let sx = (dx - x as i64) as usize;
                let d = &mut dst_row[dx as usize];
                *d = over(src_row[sx], *d);
            }
        }
    }
}

impl Pix {
    /// Return a copy of this image with `src` composited at `(x, y)`.
    pub fn composite(&self, src: &Pix, x: i32, y: i32) -> Pix {
        let mut out = self.to_mut();
        out.composite_over(src, x, y);
        out.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_over_extremes() {
        let bg = Rgba::rgb(20, 83, 45);
        assert_eq!(over(Rgba::TRANSPARENT, bg), bg);
        assert_eq!(over(Rgba::WHITE, bg), Rgba::WHITE);
    }

    #[test]
    fn test_over_half_alpha_on_opaque() {
        let out = over(Rgba::new(255, 255, 255, 128), Rgba::BLACK);
        assert_eq!(out.a, 255);
        assert!((out.r as i32 - 128).abs() <= 1);
    }

    #[test]
    fn test_composite_offset_and_clip() {
        let bg = Pix::new_filled(4, 4, Rgba::BLACK).unwrap();
        let fg = Pix::new_filled(2, 2, Rgba::WHITE).unwrap();

        let out = bg.composite(&fg, 3, -1);
        assert_eq!(out.get_pixel(3, 0), Some(Rgba::WHITE));
        assert_eq!(out.get_pixel(3, 1), Some(Rgba::BLACK));
        assert_eq!(out.get_pixel(2, 0), Some(Rgba::BLACK));

        // Fully outside: nothing changes
        let out = bg.composite(&fg, 10, 10);
        assert_eq!(out.data(), bg.data());
    }
}

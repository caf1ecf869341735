//! Image statistics and probing
//!
//! - Sampling well-known positions (corners, edge midpoints, inset, center)
//! - Mean luminance over sufficiently opaque pixels
//! - Counting pixels that satisfy a test

use super::Pix;
use crate::color::Rgba;

/// A named sampling position, resolved against the image size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbePoint {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Middle of the top edge
    TopMid,
    /// Middle of the bottom edge
    BottomMid,
    /// Middle of the left edge
    LeftMid,
    /// Middle of the right edge
    RightMid,
    /// One tenth of the way in from the top-left corner
    Inset,
    Center,
}

impl ProbePoint {
    /// The four corners.
    pub const CORNERS: [ProbePoint; 4] = [
        ProbePoint::TopLeft,
        ProbePoint::TopRight,
        ProbePoint::BottomLeft,
        ProbePoint::BottomRight,
    ];

    /// The four edge midpoints.
    pub const EDGES: [ProbePoint; 4] = [
        ProbePoint::TopMid,
        ProbePoint::BottomMid,
        ProbePoint::LeftMid,
        ProbePoint::RightMid,
    ];

    /// Every probe point.
    pub const ALL: [ProbePoint; 10] = [
        ProbePoint::TopLeft,
        ProbePoint::TopRight,
        ProbePoint::BottomLeft,
        ProbePoint::BottomRight,
        ProbePoint::TopMid,
        ProbePoint::BottomMid,
        ProbePoint::LeftMid,
        ProbePoint::RightMid,
        ProbePoint::Inset,
        ProbePoint::Center,
    ];

    /// Resolve to a coordinate inside a `width` x `height` image.
    pub fn resolve(self, width: u32, height: u32) -> (u32, u32) {
        let (r, b) = (width - 1, height - 1);
        let (mx, my) = (width / 2, height / 2);
        match self {
            ProbePoint::TopLeft => (0, 0),
            ProbePoint::TopRight => (r, 0),
            ProbePoint::BottomLeft => (0, b),
            ProbePoint::BottomRight => (r, b),
            ProbePoint::TopMid => (mx, 0),
            ProbePoint::BottomMid => (mx, b),
            ProbePoint::LeftMid => (0, my),
            ProbePoint::RightMid => (r, my),
            ProbePoint::Inset => (width / 10, height / 10),
            ProbePoint::Center => (mx, my),
        }
    }
}

/// A sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    pub point: ProbePoint,
    pub x: u32,
    pub y: u32,
    pub color: Rgba,
}

impl Pix {
    /// Sample the pixel at a named position.
    pub fn probe(&self, point: ProbePoint) -> Probe {
        let (x, y) = point.resolve(self.width(), self.height());
        Probe {
            point,
            x,
            y,
            color: self.get_pixel_unchecked(x, y),
        }
    }

    /// Sample several named positions.
    pub fn probe_all(&self, points: &[ProbePoint]) -> Vec<Probe> {
        points.iter().map(|&p| self.probe(p)).collect()
    }

    /// Mean luminance of pixels whose alpha exceeds `min_alpha`.
    ///
    /// Returns `None` when no pixel qualifies.
    pub fn mean_luminance(&self, min_alpha: u8) -> Option<f64> {
        let (sum, n) = self
            .data()
            .iter()
            .filter(|p| p.a > min_alpha)
            .fold((0.0f64, 0u64), |(s, n), p| (s + p.luminance() as f64, n + 1));
        (n > 0).then(|| sum / n as f64)
    }

    /// Count pixels for which `test` returns true.
    pub fn count_matching<F: Fn(Rgba) -> bool>(&self, test: F) -> u64 {
        self.data().iter().filter(|&&p| test(p)).count() as u64
    }
}

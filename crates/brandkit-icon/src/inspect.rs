//! Logo inspection
//!
//! Samples corners, edge midpoints, an inset point and the center, and
//! classifies the logo as light or dark artwork.

use crate::{IconError, IconResult};
use brandkit_core::{Pix, Probe, ProbePoint};
use brandkit_io::read_image;
use brandkit_region::ColorPredicate;
use std::path::Path;

/// Pixels at or below this alpha are ignored for luminance.
pub const OPAQUE_ALPHA_FLOOR: u8 = 128;

/// Mean luminance above this is light artwork.
pub const LIGHT_LUMINANCE: f64 = 128.0;

/// Overall tone of the opaque part of a logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Light artwork, suited to a dark background
    Light,
    /// Dark artwork, suited to a light background
    Dark,
}

impl Tone {
    pub fn from_luminance(mean: f64) -> Self {
        if mean > LIGHT_LUMINANCE {
            Tone::Light
        } else {
            Tone::Dark
        }
    }
}

/// Summary of a logo image.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoReport {
    pub width: u32,
    pub height: u32,
    /// One probe per [`ProbePoint::ALL`] entry, in that order
    pub probes: Vec<Probe>,
    /// `None` when the image has no sufficiently opaque pixel
    pub mean_luminance: Option<f64>,
    pub tone: Option<Tone>,
}

impl LogoReport {
    pub fn from_pix(pix: &Pix) -> Self {
        let mean_luminance = pix.mean_luminance(OPAQUE_ALPHA_FLOOR);
        Self {
            width: pix.width(),
            height: pix.height(),
            probes: pix.probe_all(&ProbePoint::ALL),
            mean_luminance,
            tone: mean_luminance.map(Tone::from_luminance),
        }
    }

    /// The probe taken at `point`
    pub fn probe(&self, point: ProbePoint) -> Option<&Probe> {
        self.probes.iter().find(|p| p.point == point)
    }

    /// Whether any corner or edge probe still satisfies `background`.
    pub fn has_background_border<P: ColorPredicate + ?Sized>(&self, background: &P) -> bool {
        ProbePoint::CORNERS
            .iter()
            .chain(ProbePoint::EDGES.iter())
            .filter_map(|&pt| self.probe(pt))
            .any(|p| background.matches(p.color))
    }
}

/// Read and summarize the logo at `path`.
pub fn inspect_logo<P: AsRef<Path>>(path: P) -> IconResult<LogoReport> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(IconError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    let pix = read_image(path)?;
    let report = LogoReport::from_pix(&pix);
    log::info!(
        "inspected {} ({}x{}): mean luminance {:?}, tone {:?}",
        path.display(),
        report.width,
        report.height,
        report.mean_luminance,
        report.tone
    );
    Ok(report)
}

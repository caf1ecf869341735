//! Image scaling operations
//!
//! Provides two resampling algorithms:
//! - Sampling (nearest neighbor)
//! - Lanczos3 (windowed sinc, separable, for high-quality icon output)
//!
//! Lanczos3 runs on premultiplied alpha so fully transparent pixels
//! contribute no color to their neighbors.

use crate::{TransformError, TransformResult};
use brandkit_core::{Pix, Rgba};
use std::f32::consts::PI;

/// Scaling method to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMethod {
    /// Nearest-neighbor sampling (fastest, pixelated results)
    Sampling,
    /// Lanczos windowed sinc with a 3-lobe support
    #[default]
    Lanczos3,
}

const LANCZOS_SUPPORT: f32 = 3.0;

/// Scale an image by the given factors
///
/// Output dimensions are `round(w * scale_x)` by `round(h * scale_y)`,
/// never less than 1.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScaleFactor`] if a factor is not a
/// positive finite number.
pub fn scale(pix: &Pix, scale_x: f32, scale_y: f32, method: ScaleMethod) -> TransformResult<Pix> {
    for (name, s) in [("x", scale_x), ("y", scale_y)] {
        if !s.is_finite() || s <= 0.0 {
            return Err(TransformError::InvalidScaleFactor(format!(
                "{name} factor must be positive, got {s}"
            )));
        }
    }
    let w = ((pix.width() as f32 * scale_x).round() as u32).max(1);
    let h = ((pix.height() as f32 * scale_y).round() as u32).max(1);
    scale_to_size_with(pix, w, h, method)
}

/// Scale an image to a specific size with Lanczos3
///
/// # Arguments
/// * `pix` - Input image
/// * `width` - Target width (0 to maintain aspect ratio)
/// * `height` - Target height (0 to maintain aspect ratio)
pub fn scale_to_size(pix: &Pix, width: u32, height: u32) -> TransformResult<Pix> {
    scale_to_size_with(pix, width, height, ScaleMethod::Lanczos3)
}

/// Scale an image to a specific size with the given method
///
/// A zero `width` or `height` is derived from the other dimension,
/// keeping the aspect ratio.
///
/// # Errors
///
/// Returns [`TransformError::InvalidParameters`] if both dimensions are 0.
pub fn scale_to_size_with(
    pix: &Pix,
    width: u32,
    height: u32,
    method: ScaleMethod,
) -> TransformResult<Pix> {
    let (w, h) = resolve_size(pix.width(), pix.height(), width, height)?;
    if w == pix.width() && h == pix.height() {
        return Ok(pix.clone());
    }
    match method {
        ScaleMethod::Sampling => sample(pix, w, h),
        ScaleMethod::Lanczos3 => lanczos3(pix, w, h),
    }
}

/// Scale an image using nearest-neighbor sampling
pub fn scale_by_sampling(pix: &Pix, scale_x: f32, scale_y: f32) -> TransformResult<Pix> {
    scale(pix, scale_x, scale_y, ScaleMethod::Sampling)
}

fn resolve_size(ws: u32, hs: u32, wd: u32, hd: u32) -> TransformResult<(u32, u32)> {
    let round_dim = |v: f64| (v.round() as u32).max(1);
    match (wd, hd) {
        (0, 0) => Err(TransformError::InvalidParameters(
            "target width and height are both 0".to_string(),
        )),
        (0, h) => Ok((round_dim(ws as f64 * h as f64 / hs as f64), h)),
        (w, 0) => Ok((w, round_dim(hs as f64 * w as f64 / ws as f64))),
        (w, h) => Ok((w, h)),
    }
}

fn sample(pix: &Pix, wd: u32, hd: u32) -> TransformResult<Pix> {
    let (ws, hs) = (pix.width(), pix.height());
    let rx = ws as f32 / wd as f32;
    let ry = hs as f32 / hd as f32;

    let mut data = Vec::with_capacity(wd as usize * hd as usize);
    for y in 0..hd {
        let sy = (((y as f32 + 0.5) * ry) as u32).min(hs - 1);
        let row = pix.row_data(sy);
        for x in 0..wd {
            let sx = (((x as f32 + 0.5) * rx) as u32).min(ws - 1);
            data.push(row[sx as usize]);
        }
    }
    Ok(Pix::from_raw(wd, hd, data)?)
}

#[inline]
fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        1.0
    } else {
        let a = x * PI;
        a.sin() / a
    }
}

#[inline]
fn lanczos3_kernel(x: f32) -> f32 {
    if x.abs() < LANCZOS_SUPPORT {
        sinc(x) * sinc(x / LANCZOS_SUPPORT)
    } else {
        0.0
    }
}

/// Normalized filter taps for one output coordinate.
struct Taps {
    start: usize,
    weights: Vec<f32>,
}

/// Compute the filter taps mapping `src_len` samples onto `dst_len`.
fn compute_taps(src_len: u32, dst_len: u32) -> Vec<Taps> {
    let ratio = src_len as f32 / dst_len as f32;
    // Widen the kernel when shrinking so it also acts as a low-pass filter
    let filter_scale = ratio.max(1.0);
    let support = LANCZOS_SUPPORT * filter_scale;

    (0..dst_len)
        .map(|i| {
            let center = (i as f32 + 0.5) * ratio;
            let lo = ((center - support).floor().max(0.0)) as usize;
            let hi = ((center + support).ceil() as usize).min(src_len as usize);
            let mut weights: Vec<f32> = (lo..hi)
                .map(|j| lanczos3_kernel((j as f32 + 0.5 - center) / filter_scale))
                .collect();
            let sum: f32 = weights.iter().sum();
            if sum != 0.0 {
                weights.iter_mut().for_each(|w| *w /= sum);
            }
            Taps { start: lo, weights }
        })
        .collect()
}

#[inline]
fn premultiply(p: Rgba) -> [f32; 4] {
    let a = p.a as f32 / 255.0;
    [p.r as f32 * a, p.g as f32 * a, p.b as f32 * a, p.a as f32]
}

#[inline]
fn unpremultiply(v: [f32; 4]) -> Rgba {
    let a = v[3].round().clamp(0.0, 255.0);
    if a == 0.0 {
        return Rgba::TRANSPARENT;
    }
    let k = 255.0 / a;
    let ch = |c: f32| (c * k).round().clamp(0.0, 255.0) as u8;
    Rgba::new(ch(v[0]), ch(v[1]), ch(v[2]), a as u8)
}

fn lanczos3(pix: &Pix, wd: u32, hd: u32) -> TransformResult<Pix> {
    let (ws, hs) = (pix.width() as usize, pix.height() as usize);
    let src: Vec<[f32; 4]> = pix.data().iter().map(|&p| premultiply(p)).collect();

    // Horizontal pass: hs rows x wd columns
    let xtaps = compute_taps(ws as u32, wd);
    let mut tmp = vec![[0.0f32; 4]; hs * wd as usize];
    for y in 0..hs {
        let row = &src[y * ws..(y + 1) * ws];
        let out = &mut tmp[y * wd as usize..(y + 1) * wd as usize];
        for (o, taps) in out.iter_mut().zip(&xtaps) {
            for (k, &w) in taps.weights.iter().enumerate() {
                let s = row[taps.start + k];
                for c in 0..4 {
                    o[c] += s[c] * w;
                }
            }
        }
    }

    // Vertical pass: hd rows x wd columns
    let ytaps = compute_taps(hs as u32, hd);
    let wd_us = wd as usize;
    let mut data = Vec::with_capacity(wd_us * hd as usize);
    for taps in &ytaps {
        for x in 0..wd_us {
            let mut acc = [0.0f32; 4];
            for (k, &w) in taps.weights.iter().enumerate() {
                let s = tmp[(taps.start + k) * wd_us + x];
                for c in 0..4 {
                    acc[c] += s[c] * w;
                }
            }
            data.push(unpremultiply(acc));
        }
    }

    Ok(Pix::from_raw(wd, hd, data)?)
}

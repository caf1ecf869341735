//! Border-connected fill regression test
//!
//! Tests fill_border_connected, replace_border_connected and
//! border_connected_mask against the region's defining properties.

use brandkit_core::{ImageFormat, Pix, Rgba};
use brandkit_region::{
    BrightnessThreshold, ColorPredicate, border_connected_mask, fill_border_connected,
    replace_border_connected,
};
use brandkit_test::RegParams;

const GREEN: Rgba = Rgba::rgb(17, 124, 50);
const DARK: Rgba = Rgba::rgb(40, 40, 40);

/// Noisy near-white, as left behind by lossy compression
fn off_white(seed: u32) -> Rgba {
    let v = 230 + (seed % 25) as u8;
    Rgba::rgb(v, 255 - (seed % 7) as u8, v.saturating_add(3))
}

/// Deterministic pseudo-random grid: roughly `dark_per_mille` dark pixels
fn random_grid(w: u32, h: u32, seed: u32, dark_per_mille: u32) -> Pix {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    let mut pm = Pix::new(w, h).unwrap().into_mut();
    for y in 0..h {
        for x in 0..w {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let r = (state >> 16) % 1000;
            let px = if r < dark_per_mille {
                DARK
            } else {
                off_white(state >> 8)
            };
            pm.set_pixel_unchecked(x, y, px);
        }
    }
    pm.into()
}

/// Independent reachability: iterative DFS over the *input* matching pixels.
fn reachable_from_border<P: ColorPredicate>(pix: &Pix, pred: &P) -> Vec<bool> {
    let (w, h) = (pix.width() as i64, pix.height() as i64);
    let is_match = |x: i64, y: i64| pred.matches(pix.get_pixel_unchecked(x as u32, y as u32));
    let mut seen = vec![false; (w * h) as usize];
    let mut stack = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let on_border = x == 0 || y == 0 || x == w - 1 || y == h - 1;
            if on_border && is_match(x, y) {
                stack.push((x, y));
            }
        }
    }
    while let Some((x, y)) = stack.pop() {
        let i = (y * w + x) as usize;
        if seen[i] {
            continue;
        }
        seen[i] = true;
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let (nx, ny) = (x + dx, y + dy);
            if nx >= 0 && ny >= 0 && nx < w && ny < h && is_match(nx, ny) {
                stack.push((nx, ny));
            }
        }
    }
    seen
}

fn filled(pix: &Pix) -> (Pix, u32) {
    let mut pm = pix.to_mut();
    let n = fill_border_connected(&mut pm, &BrightnessThreshold::default(), GREEN);
    (pm.into(), n)
}

#[test]
fn border_fill_reg() {
    let mut rp = RegParams::new("border_fill");
    let pred = BrightnessThreshold::default();

    // --- 5x5 white with a non-white center ---
    let mut pm = Pix::new_filled(5, 5, Rgba::WHITE).unwrap().into_mut();
    pm.set_pixel(2, 2, DARK).unwrap();
    let pix: Pix = pm.into();
    let (out, n) = filled(&pix);
    rp.compare_values(24.0, n as f64, 0.0);
    rp.compare_values(24.0, out.count_matching(|p| p == GREEN) as f64, 0.0);
    rp.compare_values(1.0, pix.count_pixel_diffs(&out).map_or(0, |d| 25 - d) as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(2, 2) == Some(DARK)) as u8 as f64, 0.0);

    // --- 3x1 single row, all matching ---
    let pix = Pix::new_filled(3, 1, Rgba::WHITE).unwrap();
    let (out, n) = filled(&pix);
    rp.compare_values(3.0, n as f64, 0.0);
    rp.compare_pix(&out, &Pix::new_filled(3, 1, GREEN).unwrap());

    // --- 1x1 ---
    let (out, n) = filled(&Pix::new_filled(1, 1, Rgba::WHITE).unwrap());
    rp.compare_values(1.0, n as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(0, 0) == Some(GREEN)) as u8 as f64, 0.0);

    // --- No matching border pixel: byte-for-byte no-op ---
    let mut pm = Pix::new_filled(8, 8, Rgba::WHITE).unwrap().into_mut();
    for i in 0..8 {
        for (x, y) in [(i, 0), (i, 7), (0, i), (7, i)] {
            pm.set_pixel(x, y, DARK).unwrap();
        }
    }
    let pix: Pix = pm.into();
    let (out, n) = filled(&pix);
    rp.compare_values(0.0, n as f64, 0.0);
    rp.compare_pix(&pix, &out);

    // --- 2-pixel-wide barrier around an interior blob ---
    // 16x16: outer white band of width 3, dark band of width 2, white blob inside
    let mut pm = Pix::new_filled(16, 16, off_white(7)).unwrap().into_mut();
    for y in 3..13 {
        for x in 3..13 {
            let in_band = x < 5 || x >= 11 || y < 5 || y >= 11;
            if in_band {
                pm.set_pixel(x, y, DARK).unwrap();
            }
        }
    }
    let pix: Pix = pm.into();
    let (out, n) = filled(&pix);
    // Outer band: 256 - 100 = 156; blob 6x6 = 36 stays
    rp.compare_values(156.0, n as f64, 0.0);
    rp.compare_values(36.0, out.count_matching(|p| pred.matches(p)) as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(5, 5) == pix.get_pixel(5, 5)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_pixel(10, 10) == pix.get_pixel(10, 10)) as u8 as f64, 0.0);
    rp.write_pix(&out, ImageFormat::Png).unwrap();

    // --- Properties over pseudo-random grids ---
    let sizes = [(1, 1), (1, 9), (9, 1), (2, 2), (13, 7), (32, 32), (57, 41)];
    for (case, &(w, h)) in sizes.iter().enumerate() {
        for density in [0, 150, 400, 600] {
            let pix = random_grid(w, h, case as u32 * 31 + density, density);
            let expected = reachable_from_border(&pix, &pred);
            let (out, n) = filled(&pix);

            // Only the input value or the target appears; recolored = reachable
            let mut only_two_values = true;
            let mut matches_reachability = true;
            let mut changed = 0u32;
            for y in 0..h {
                for x in 0..w {
                    let before = pix.get_pixel_unchecked(x, y);
                    let after = out.get_pixel_unchecked(x, y);
                    if after != before && after != GREEN {
                        only_two_values = false;
                    }
                    let recolored = after == GREEN;
                    if recolored {
                        changed += 1;
                    }
                    if recolored != expected[(y * w + x) as usize] {
                        matches_reachability = false;
                    }
                }
            }
            rp.compare_values(1.0, only_two_values as u8 as f64, 0.0);
            rp.compare_values(1.0, matches_reachability as u8 as f64, 0.0);
            rp.compare_values(changed as f64, n as f64, 0.0);

            // Mask agrees with the mutation
            let mask = border_connected_mask(&pix, &pred);
            rp.compare_values(n as f64, mask.count() as f64, 0.0);

            // Idempotence
            let (twice, n2) = filled(&out);
            rp.compare_values(0.0, n2 as f64, 0.0);
            rp.compare_pix(&out, &twice);

            // Copying variant gives the same result and leaves the input alone
            let copy = replace_border_connected(&pix, &pred, GREEN).unwrap();
            rp.compare_pix(&out, &copy);
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn border_fill_alpha_reg() {
    let mut rp = RegParams::new("border_fill_alpha");

    // Transparent white border is still "white" to the brightness predicate
    let mut pm = Pix::new_filled(4, 4, Rgba::new(255, 255, 255, 0)).unwrap().into_mut();
    pm.set_pixel(1, 1, DARK).unwrap();
    pm.set_pixel(2, 2, DARK).unwrap();
    let pix: Pix = pm.into();
    let (out, n) = filled(&pix);
    rp.compare_values(14.0, n as f64, 0.0);
    rp.compare_values(255.0, out.get_pixel_unchecked(0, 0).a as f64, 0.0);

    // An alpha-aware closure predicate leaves the transparent pixels alone
    let opaque_white = |p: Rgba| p.a == 255 && BrightnessThreshold::default().matches(p);
    let mut pm = pix.to_mut();
    let n = fill_border_connected(&mut pm, &opaque_white, GREEN);
    rp.compare_values(0.0, n as f64, 0.0);

    assert!(rp.cleanup());
}

//! Scale regression test
//!
//! Resizes a synthetic logo on a transparent canvas to the icon sizes.

use brandkit_core::{ImageFormat, Pix, Rgba};
use brandkit_test::RegParams;
use brandkit_transform::{ScaleMethod, scale, scale_by_sampling, scale_to_size, scale_to_size_with};

const GREEN: Rgba = Rgba::rgb(17, 124, 50);

/// 256x256 transparent canvas with an opaque green square in the middle
fn logo() -> Pix {
    let mut pm = Pix::new(256, 256).unwrap().into_mut();
    for y in 64..192 {
        for x in 64..192 {
            pm.set_pixel_unchecked(x, y, GREEN);
        }
    }
    pm.into()
}

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");
    let pixs = logo();
    let (w, h) = (pixs.width(), pixs.height());

    // --- Icon sizes ---
    for size in [192u32, 180, 64, 16] {
        let out = scale_to_size(&pixs, size, size).expect("scale_to_size");
        rp.compare_values(size as f64, out.width() as f64, 0.0);
        rp.compare_values(size as f64, out.height() as f64, 0.0);

        // Corners stay fully transparent, center stays the brand color
        let c = out.get_pixel(size / 2, size / 2).unwrap();
        rp.compare_values(1.0, (c == GREEN) as u8 as f64, 0.0);
        rp.compare_values(0.0, out.get_pixel(0, 0).unwrap().a as f64, 0.0);

        // Transparent neighbors contribute no hue to the edge pixels
        let off_hue = out.count_matching(|p| p.a >= 16 && (p.r > 20 || p.b > 55));
        rp.compare_values(0.0, off_hue as f64, 0.0);
        rp.write_pix(&out, ImageFormat::Png).unwrap();
    }

    // --- Aspect ratio from one side ---
    let wide = Pix::new_filled(300, 100, Rgba::WHITE).unwrap();
    let out = scale_to_size(&wide, 0, 50).unwrap();
    rp.compare_values(150.0, out.width() as f64, 0.0);
    let out = scale_to_size(&wide, 60, 0).unwrap();
    rp.compare_values(20.0, out.height() as f64, 0.0);
    rp.compare_values(1.0, scale_to_size(&wide, 0, 0).is_err() as u8 as f64, 0.0);

    // --- Scale by factor ---
    let up2 = scale(&pixs, 2.0, 2.0, ScaleMethod::Lanczos3).expect("scale 2x");
    rp.compare_values((w * 2) as f64, up2.width() as f64, 0.0);
    rp.compare_values((h * 2) as f64, up2.height() as f64, 0.0);

    let aniso = scale(&pixs, 2.0, 0.5, ScaleMethod::Lanczos3).expect("aniso scale");
    rp.compare_values((w * 2) as f64, aniso.width() as f64, 0.0);
    rp.compare_values((h / 2) as f64, aniso.height() as f64, 0.0);

    // --- Sampling only produces input colors ---
    let sampled = scale_by_sampling(&pixs, 0.3, 0.3).unwrap();
    let foreign = sampled.count_matching(|p| p != GREEN && p != Rgba::TRANSPARENT);
    rp.compare_values(0.0, foreign as f64, 0.0);

    // --- Same size is an identity ---
    let same = scale_to_size_with(&pixs, w, h, ScaleMethod::Lanczos3).unwrap();
    rp.compare_pix(&pixs, &same);

    assert!(rp.cleanup());
}

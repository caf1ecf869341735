//! Facade regression test
//!
//! Decodes, cleans and re-encodes a logo using only the `brandkit`
//! re-exports, with the codec features forwarded to brandkit-io.
//!
//! Run with:
//! ```
//! cargo test -p brandkit --test facade_reg --features all-formats
//! ```

use brandkit::io::{ImageFormat, read_image, write_image};
use brandkit::region::{BrightnessThreshold, fill_border_connected};
use brandkit::{Pix, Rgba};
use brandkit_test::{RegParams, scratch_dir};

#[test]
fn facade_reg() {
    let mut rp = RegParams::new("facade");
    let dir = scratch_dir("facade").expect("scratch dir");

    let mut pm = Pix::new_filled(8, 8, Rgba::WHITE).unwrap().into_mut();
    pm.set_pixel(4, 4, Rgba::BLACK).unwrap();
    let path = dir.join("logo.png");
    write_image(&pm.into(), &path, ImageFormat::Png).expect("write png");

    let mut pm = read_image(&path).expect("read png").into_mut();
    let green = Rgba::rgb(17, 124, 50);
    let n = fill_border_connected(&mut pm, &BrightnessThreshold::default(), green);
    rp.compare_values(63.0, n as f64, 0.0);

    let pix: Pix = pm.into();
    rp.compare_values(1.0, (pix.get_pixel(0, 0) == Some(green)) as u8 as f64, 0.0);
    rp.compare_values(1.0, (pix.get_pixel(4, 4) == Some(Rgba::BLACK)) as u8 as f64, 0.0);

    let jpg = dir.join("logo.jpg");
    write_image(&pix, &jpg, ImageFormat::Jpeg).expect("write jpeg");
    let back = read_image(&jpg).expect("read jpeg");
    rp.compare_values(8.0, back.width() as f64, 0.0);

    std::fs::remove_dir_all(&dir).ok();
    assert!(rp.cleanup());
}

//! Image container regression test
//!
//! Run with:
//! ```
//! cargo test -p regionfind-core --test image_reg
//! ```

use regionfind_core::{Color, Error, Image, Point, pixel};
use regionfind_test::RegParams;

#[test]
fn image_reg() {
    let mut rp = RegParams::new("image");

    // Construction from interleaved capture buffers
    let rgb: Vec<u8> = (0..4 * 3 * 3).map(|i| i as u8).collect();
    let image = Image::from_rgb_bytes(4, 3, &rgb).expect("rgb buffer");
    rp.check(image.get_color(1, 0) == Some(Color::new(3, 4, 5)), "rgb layout");
    rp.check(
        image.get_rgba(3, 2).map(|c| c.3) == Some(pixel::OPAQUE),
        "rgb input is opaque",
    );
    let rgba = image.to_rgba_bytes();
    rp.compare_values(48.0, rgba.len() as f64, 0.0);
    let again = Image::from_rgba_bytes(4, 3, &rgba).expect("rgba buffer");
    rp.compare_images(&image, &again);

    rp.check(
        matches!(
            Image::from_rgb_bytes(4, 3, &rgb[1..]),
            Err(Error::BufferLength { .. })
        ),
        "short buffer rejected",
    );
    rp.check(
        matches!(Image::new(0, 5), Err(Error::InvalidDimension { .. })),
        "zero width rejected",
    );
    rp.check(
        matches!(Image::new(5, 0), Err(Error::InvalidDimension { .. })),
        "zero height rejected",
    );

    // Shared data and copy-on-write
    let shared = image.clone();
    rp.compare_values(2.0, image.ref_count() as f64, 0.0);
    let mut copy = shared.to_mut();
    copy.set_color(0, 0, Color::WHITE).unwrap();
    let copy: Image = copy.into();
    rp.check(image.get_color(0, 0) == Some(Color::new(0, 1, 2)), "original untouched");
    rp.check(copy.get_color(0, 0) == Some(Color::WHITE), "copy modified");
    rp.check(shared.try_into_mut().is_err(), "shared image stays immutable");

    // Bounds
    let mut m = Image::new_filled(2, 2, Color::BLACK).unwrap().to_mut();
    rp.check(
        matches!(m.set_color(2, 0, Color::RED), Err(Error::OutOfBounds { .. })),
        "write outside rejected",
    );
    rp.check(m.get_color(1, 2).is_none(), "read outside is none");

    // Parsing helpers used by the command line
    rp.check("#ff8000".parse::<Color>().ok() == Some(Color::new(255, 128, 0)), "hex color");
    rp.check("1, 2, 3".parse::<Color>().ok() == Some(Color::new(1, 2, 3)), "rgb color");
    rp.check("4,7".parse::<Point>().ok() == Some(Point::new(4, 7)), "point");
    rp.check("4;7".parse::<Point>().is_err(), "bad point");

    assert!(rp.cleanup(), "image regression test failed");
}

//! Region visualization regression test
//!
//! Run with:
//! ```
//! cargo test -p regionfind-region --test recolor_reg
//! ```
//!
//! Write the recolored frames to tests/regout:
//! ```
//! REGTEST_MODE=display cargo test -p regionfind-region --test recolor_reg
//! ```

use rand::{SeedableRng, rngs::StdRng};
use regionfind_core::{Color, Point, pixel};
use regionfind_region::{RegionOptions, find_regions, recolor, recolor_with_rng};
use regionfind_test::RegParams;
use regionfind_test::synth::{self, Block};
use std::collections::HashSet;

#[test]
fn recolor_reg() {
    let mut rp = RegParams::new("recolor");

    let image = synth::blocks(
        48,
        32,
        Color::new(30, 30, 30),
        &[
            Block::new(1, 1, 12, 12, Color::GREEN),
            Block::new(20, 4, 9, 9, Color::GREEN),
            Block::new(35, 20, 10, 10, Color::GREEN),
            Block::new(15, 20, 4, 4, Color::GREEN),
        ],
    )
    .unwrap();
    let original = image.deep_clone();
    rp.write_image(&image, "source").unwrap();

    let regions = find_regions(&image, Color::GREEN, &RegionOptions::default()).unwrap();
    rp.compare_values(3.0, regions.len() as f64, 0.0);

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let out = recolor_with_rng(&image, &regions, &mut rng).unwrap();
    rp.write_image(&out, "recolored").unwrap();

    rp.check(out.dimensions() == image.dimensions(), "dimensions preserved");
    rp.compare_images(&image, &original);

    // Non-region pixels keep their value
    let claimed: HashSet<_> = regions.iter().flatten().copied().collect();
    let mut untouched = true;
    for y in 0..image.height() {
        for x in 0..image.width() {
            if !claimed.contains(&Point::new(x, y)) && out.get_pixel(x, y) != image.get_pixel(x, y) {
                untouched = false;
            }
        }
    }
    rp.check(untouched, "pixels outside regions unchanged");

    // One opaque color per region
    for region in &regions {
        let colors: HashSet<u32> = region
            .iter()
            .filter_map(|p| out.get_pixel(p.x, p.y))
            .collect();
        rp.compare_values(1.0, colors.len() as f64, 0.0);
        rp.check(
            colors.iter().all(|&c| pixel::alpha(c) == pixel::OPAQUE),
            "region color is opaque",
        );
    }

    // Same seed, same picture
    let again = recolor_with_rng(&image, &regions, &mut StdRng::seed_from_u64(0x5eed)).unwrap();
    rp.compare_images(&out, &again);

    // Thread RNG path obeys the same invariants
    let threaded = recolor(&image, &regions).unwrap();
    rp.check(threaded.dimensions() == image.dimensions(), "thread rng dimensions");
    rp.check(
        threaded.get_pixel(16, 21) == image.get_pixel(16, 21),
        "dropped region left unpainted",
    );

    assert!(rp.cleanup(), "recolor regression test failed");
}

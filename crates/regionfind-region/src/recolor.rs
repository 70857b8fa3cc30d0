//! Region visualization
//!
//! Paints every region of a [`RegionSet`] in its own random color on a
//! copy of the source image.

use crate::error::RegionResult;
use crate::region::RegionSet;
use rand::Rng;
use regionfind_core::{Color, Image};

/// Draw a color uniformly from the 24-bit RGB space.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_rgb24(rng.next_u32())
}

/// Recolor `regions` on a copy of `image` using the thread-local RNG.
///
/// See [`recolor_with_rng`].
pub fn recolor(image: &Image, regions: &RegionSet) -> RegionResult<Image> {
    recolor_with_rng(image, regions, &mut rand::rng())
}

/// Recolor `regions` on a copy of `image`.
///
/// Each region gets one opaque color drawn from `rng`, independently of
/// the others. Pixels outside every region keep their value. The input
/// image is not modified.
///
/// # Errors
///
/// Returns an error if a region holds a point outside the image, which
/// happens when the regions were found on an image of another size.
pub fn recolor_with_rng<R: Rng + ?Sized>(
    image: &Image,
    regions: &RegionSet,
    rng: &mut R,
) -> RegionResult<Image> {
    let mut out = image.to_mut();
    for region in regions {
        let color = random_color(rng);
        for p in region {
            out.set_color(p.x, p.y, color)?;
        }
    }
    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;
    use rand::{SeedableRng, rngs::StdRng};
    use regionfind_core::Point;

    #[test]
    fn test_empty_set_is_copy() {
        let image = Image::new_filled(3, 2, Color::GREEN).unwrap();
        let out = recolor(&image, &RegionSet::new()).unwrap();
        assert_eq!(out.data(), image.data());
    }

    #[test]
    fn test_same_seed_same_colors() {
        let image = Image::new_filled(3, 3, Color::BLACK).unwrap();
        let set = RegionSet::from_regions(vec![
            Region::from_points(vec![Point::new(0, 0)]),
            Region::from_points(vec![Point::new(2, 2)]),
        ]);
        let a = recolor_with_rng(&image, &set, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = recolor_with_rng(&image, &set, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_out_of_bounds_region() {
        let image = Image::new_filled(2, 2, Color::BLACK).unwrap();
        let set = RegionSet::from_regions(vec![Region::from_points(vec![Point::new(5, 0)])]);
        assert!(recolor(&image, &set).is_err());
        // input untouched
        assert_eq!(image.get_color(0, 0), Some(Color::BLACK));
    }
}

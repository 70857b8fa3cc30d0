//! Color similarity test

use regionfind_core::Color;

/// Default per-channel threshold.
pub const DEFAULT_THRESHOLD: u32 = 20;

/// Check whether `candidate` is close enough to `target`.
///
/// Each of the red, green and blue differences must be strictly below
/// `threshold`; the channels are tested independently (max-norm), not
/// as a Euclidean distance. A threshold of 0 accepts only identical
/// colors, the same as a threshold of 1.
///
/// ```
/// use regionfind_core::Color;
/// use regionfind_region::colors_match;
///
/// let target = Color::new(200, 40, 40);
/// assert!(colors_match(target, Color::new(219, 21, 40), 20));
/// assert!(!colors_match(target, Color::new(220, 40, 40), 20));
/// ```
#[inline]
pub fn colors_match(target: Color, candidate: Color, threshold: u32) -> bool {
    (target.max_channel_diff(candidate) as u32) < threshold.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_bound() {
        let a = Color::new(100, 100, 100);
        assert!(colors_match(a, Color::new(119, 81, 100), 20));
        assert!(!colors_match(a, Color::new(120, 100, 100), 20));
        assert!(!colors_match(a, Color::new(100, 80, 100), 20));
    }

    #[test]
    fn test_channels_independent() {
        // Euclidean distance would be ~32.9, but each channel is within 20
        let a = Color::new(100, 100, 100);
        let b = Color::new(119, 119, 119);
        assert!(colors_match(a, b, 20));
        // One channel out of range is enough to reject
        assert!(!colors_match(a, Color::new(100, 100, 130), 20));
    }

    #[test]
    fn test_symmetric() {
        let samples = [
            Color::BLACK,
            Color::WHITE,
            Color::new(10, 250, 3),
            Color::new(30, 240, 20),
            Color::new(128, 128, 128),
        ];
        for &a in &samples {
            for &b in &samples {
                for t in [0, 1, 10, 20, 255, 256, 1000] {
                    assert_eq!(colors_match(a, b, t), colors_match(b, a, t));
                }
            }
        }
    }

    #[test]
    fn test_reflexive() {
        for t in [0, 1, 20, 300] {
            assert!(colors_match(Color::new(1, 2, 3), Color::new(1, 2, 3), t));
        }
    }

    #[test]
    fn test_zero_threshold_is_exact() {
        let a = Color::new(50, 60, 70);
        assert!(colors_match(a, a, 0));
        assert!(!colors_match(a, Color::new(51, 60, 70), 0));
    }

    #[test]
    fn test_large_threshold_matches_everything() {
        assert!(colors_match(Color::BLACK, Color::WHITE, 256));
        assert!(!colors_match(Color::BLACK, Color::WHITE, 255));
    }
}

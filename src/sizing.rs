//! Button sizing policy
//!
//! Pure function of the evasion counter. Applying the result to the page is
//! the surface's job.

use crate::consts::*;

/// Visual parameters for both buttons
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSizes {
    /// Yes button width/height (px)
    pub yes_size: f64,
    /// No button width/height (px)
    pub no_size: f64,
    /// No button opacity (0-1)
    pub no_opacity: f64,
}

impl ButtonSizes {
    pub fn yes_font_size(&self) -> f64 {
        self.yes_size / FONT_SIZE_DIVISOR
    }

    pub fn no_font_size(&self) -> f64 {
        self.no_size / FONT_SIZE_DIVISOR
    }
}

/// Compute button sizes for the given number of evasion attempts.
///
/// The Yes button grows without a cap; in practice the counter saturates so
/// it tops out at 220px.
pub fn compute_sizes(attempts: u32) -> ButtonSizes {
    let n = attempts as f64;
    ButtonSizes {
        yes_size: YES_BASE_SIZE + YES_GROWTH * n,
        no_size: (NO_BASE_SIZE - NO_SHRINK * n).max(NO_MIN_SIZE),
        no_opacity: if attempts >= NO_FADE_ATTEMPTS {
            NO_FADED_OPACITY
        } else {
            1.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_initial_sizes() {
        let s = compute_sizes(0);
        assert_eq!(s.yes_size, 80.0);
        assert_eq!(s.no_size, 60.0);
        assert_eq!(s.no_opacity, 1.0);
        assert_eq!(s.yes_font_size(), 20.0);
        assert_eq!(s.no_font_size(), 15.0);
    }

    #[test]
    fn test_no_size_floor() {
        assert_eq!(compute_sizes(4).no_size, 40.0);
        assert_eq!(compute_sizes(7).no_size, 40.0);
        assert_eq!(compute_sizes(3).no_size, 45.0);
    }

    #[test]
    fn test_opacity_boundary() {
        assert_eq!(compute_sizes(6).no_opacity, 1.0);
        assert_eq!(compute_sizes(7).no_opacity, 0.3);
        assert_eq!(compute_sizes(8).no_opacity, 0.3);
    }

    proptest! {
        #[test]
        fn no_size_matches_formula_and_never_grows(a in 0u32..7) {
            let cur = compute_sizes(a).no_size;
            let next = compute_sizes(a + 1).no_size;
            prop_assert_eq!(cur, (60.0 - 5.0 * a as f64).max(40.0));
            prop_assert!(next <= cur);
        }

        #[test]
        fn yes_size_strictly_increases(a in 0u32..3) {
            let cur = compute_sizes(a).yes_size;
            prop_assert_eq!(cur, 80.0 + 20.0 * a as f64);
            prop_assert!(compute_sizes(a + 1).yes_size > cur);
        }

        #[test]
        fn opacity_depends_only_on_threshold(a in 0u32..1000) {
            let expected = if a >= 7 { 0.3 } else { 1.0 };
            prop_assert_eq!(compute_sizes(a).no_opacity, expected);
        }
    }
}

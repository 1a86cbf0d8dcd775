//! HSV color type
//!
//! Hue is kept in degrees rather than normalised to 0..1 because both the
//! palette bands and the correction distance are defined on the degree scale.

use super::rgb::Rgb;

/// A color in HSV space.
///
/// - `h`: hue in degrees, 0.0..360.0 (0.0 for achromatic colors)
/// - `s`: saturation, 0.0..=1.0
/// - `v`: value (brightness), 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Euclidean distance over the raw (h, s, v) triple.
    ///
    /// Hue contributes in degrees and does not wrap, so two reds at 359° and
    /// 1° are 358 apart. Within the correction threshold (0.4) this makes the
    /// metric effectively "same hue to within half a degree, and near-identical
    /// saturation and value".
    ///
    /// ```
    /// use hue_palette::Hsv;
    /// let a = Hsv::new(240.0, 1.0, 1.0);
    /// let b = Hsv::new(240.3, 1.0, 0.6);
    /// assert!((a.distance(b) - 0.5).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn distance(self, other: Hsv) -> f64 {
        let dh = self.h - other.h;
        let ds = self.s - other.s;
        let dv = self.v - other.v;
        (dh * dh + ds * ds + dv * dv).sqrt()
    }

    /// True when max == min channel (hue carries no information).
    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s == 0.0
    }
}

impl From<Rgb> for Hsv {
    /// Convert an 8-bit pixel using the standard 60° sector formula.
    ///
    /// When several channels share the maximum, red wins over green and green
    /// over blue when choosing the sector.
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.normalized();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        let h = if max == min {
            0.0
        } else if max == r {
            (60.0 * ((g - b) / diff) + 360.0).rem_euclid(360.0)
        } else if max == g {
            (60.0 * ((b - r) / diff) + 120.0).rem_euclid(360.0)
        } else {
            (60.0 * ((r - g) / diff) + 240.0).rem_euclid(360.0)
        };

        let s = if max == 0.0 { 0.0 } else { diff / max };

        Self { h, s, v: max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(r: u8, g: u8, b: u8) -> Hsv {
        Hsv::from(Rgb::new(r, g, b))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_primary_and_secondary_hues() {
        assert_close(hsv(255, 0, 0).h, 0.0);
        assert_close(hsv(255, 255, 0).h, 60.0);
        assert_close(hsv(0, 255, 0).h, 120.0);
        assert_close(hsv(0, 255, 255).h, 180.0);
        assert_close(hsv(0, 0, 255).h, 240.0);
        assert_close(hsv(255, 0, 255).h, 300.0);
    }

    #[test]
    fn test_orange_reference_hue() {
        let orange = hsv(255, 165, 0);
        assert_close(orange.h, 60.0 * 165.0 / 255.0);
        assert_close(orange.s, 1.0);
        assert_close(orange.v, 1.0);
    }

    #[test]
    fn test_red_sector_wraps_below_zero() {
        // g < b in the red sector lands just under 360
        let h = hsv(255, 0, 10).h;
        assert!(h > 357.0 && h < 360.0, "got {h}");
    }

    #[test]
    fn test_achromatic_inputs() {
        let black = hsv(0, 0, 0);
        assert_eq!(black, Hsv::new(0.0, 0.0, 0.0));
        assert!(black.is_achromatic());

        let grey = hsv(128, 128, 128);
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert_close(grey.v, 128.0 / 255.0);

        let white = hsv(255, 255, 255);
        assert_eq!(white, Hsv::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_saturation_and_value() {
        let c = hsv(200, 100, 50);
        assert_close(c.v, 200.0 / 255.0);
        assert_close(c.s, 150.0 / 200.0);
    }

    #[test]
    fn test_output_ranges_for_sampled_cube() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let c = hsv(r as u8, g as u8, b as u8);
                    assert!((0.0..360.0).contains(&c.h), "hue {} out of range", c.h);
                    assert!((0.0..=1.0).contains(&c.s));
                    assert!((0.0..=1.0).contains(&c.v));
                }
            }
        }
    }

    #[test]
    fn test_distance_does_not_wrap_hue() {
        let a = Hsv::new(359.0, 1.0, 1.0);
        let b = Hsv::new(1.0, 1.0, 1.0);
        assert_close(a.distance(b), 358.0);
        assert_close(a.distance(a), 0.0);
    }
}

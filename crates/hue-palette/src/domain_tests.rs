//! Domain-critical regression tests for hue-palette.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::GridClassifier;
    use crate::classify::{classify, classify_hsv, classify_pixel, Classification, Correction};
    use crate::color::{Hsv, Rgb};
    use crate::grid::{classify_grid, PixelGrid};
    use crate::palette::Symbol;
    use pretty_assertions::assert_eq;

    // ========================================================================
    // GAP 1: Totality -- every pixel gets exactly one palette symbol
    // ========================================================================

    /// If this breaks, it means: some region of the RGB cube reaches neither a
    /// band nor the fallback, or the fallback returns something outside the
    /// alphabet. Every output character must be one of `01roygbtp`.
    #[test]
    fn test_every_rgb_input_yields_a_palette_symbol() {
        let alphabet = "01roygbtp";
        for r in (0..=255u16).step_by(5) {
            for g in (0..=255u16).step_by(5) {
                for b in (0..=255u16).step_by(5) {
                    let c = classify(Rgb::new(r as u8, g as u8, b as u8)).symbol().as_char();
                    assert!(alphabet.contains(c), "({r},{g},{b}) -> {c}");
                }
            }
        }
    }

    /// If this breaks, it means: the canonical anchors drifted. These five are
    /// the most visible colors in any converted image.
    #[test]
    fn test_anchor_colors() {
        assert_eq!(classify(Rgb::new(0, 0, 0)).symbol(), Symbol::Black);
        assert_eq!(classify(Rgb::new(255, 255, 255)).symbol(), Symbol::White);
        assert_eq!(classify(Rgb::new(255, 0, 0)).symbol(), Symbol::Red);
        assert_eq!(classify(Rgb::new(0, 255, 0)).symbol(), Symbol::Green);
        assert_eq!(classify(Rgb::new(0, 0, 255)).symbol(), Symbol::Blue);
    }

    // ========================================================================
    // GAP 2: Band order -- overlaps resolve by canonical order
    // ========================================================================

    /// If this breaks, it means: red's wraparound range (330 -> 30) is being
    /// treated as an ordinary `start <= h <= end` test, which is always false
    /// for a reversed range, so deep reds fall through to purple or fallback.
    #[test]
    fn test_red_band_wraps_through_zero() {
        let hsv = Hsv::new(350.0, 0.8, 0.8);
        assert_eq!(classify_hsv(Rgb::new(204, 41, 68), hsv, None).symbol(), Symbol::Red);

        let hsv = Hsv::new(5.0, 0.8, 0.8);
        assert_eq!(classify_hsv(Rgb::new(204, 54, 41), hsv, None).symbol(), Symbol::Red);
    }

    /// If this breaks, it means: bands are being iterated in some order other
    /// than `0 1 r o y g b t p` (for example through a hash map), so a hue of
    /// exactly 30 lands in orange instead of red.
    #[test]
    fn test_boundary_hue_goes_to_first_band() {
        let hsv = Hsv::new(30.0, 0.8, 0.8);
        assert_eq!(
            classify_hsv(Rgb::new(204, 122, 41), hsv, None),
            Classification::Band(Symbol::Red)
        );
    }

    // ========================================================================
    // GAP 3: Correction overlay
    // ========================================================================

    /// If this breaks, it means: the correction is being applied to pixels
    /// that already carry the target symbol, flipping them back or elsewhere.
    #[test]
    fn test_correction_leaves_target_symbol_alone() {
        let correction = Correction::new(Symbol::Blue, Symbol::Purple).unwrap();
        for rgb in [Rgb::new(255, 0, 255), Rgb::new(200, 40, 220), Rgb::new(160, 0, 200)] {
            assert_eq!(classify(rgb).symbol(), Symbol::Purple, "{rgb:?}");
            assert_eq!(
                classify_pixel(rgb, Some(&correction)).symbol(),
                Symbol::Purple,
                "{rgb:?}"
            );
        }
    }

    /// If this breaks, it means: the pixel-level check no longer runs before
    /// band matching. A pixel within 0.4 HSV units of blue's reference must
    /// become purple whether bands would have said blue or teal.
    #[test]
    fn test_correction_overrides_band_near_source() {
        let correction = Correction::new(Symbol::Blue, Symbol::Purple).unwrap();

        let rgb = Rgb::new(0, 0, 255);
        assert_eq!(classify(rgb).symbol(), Symbol::Blue);
        assert_eq!(classify_pixel(rgb, Some(&correction)).symbol(), Symbol::Purple);

        let rgb = Rgb::new(3, 3, 252);
        let hsv = Hsv::from(rgb);
        assert!(hsv.distance(Symbol::Blue.reference_hsv()) < 0.4);
        assert_eq!(classify_pixel(rgb, Some(&correction)).symbol(), Symbol::Purple);
    }

    /// If this breaks, it means: a correction with `from == to` or an invalid
    /// symbol is doing something other than nothing.
    #[test]
    fn test_degenerate_corrections_are_no_ops() {
        let grid = PixelGrid::new(
            3,
            1,
            vec![Rgb::new(100, 100, 100), Rgb::new(0, 0, 255), Rgb::new(90, 200, 40)],
        )
        .unwrap();
        let plain = classify_grid(&grid, None);

        assert_eq!(classify_grid(&grid, Correction::new(Symbol::Red, Symbol::Red)), plain);
        assert_eq!(classify_grid(&grid, Correction::parse('x', 'p')), plain);
        assert_eq!(classify_grid(&grid, Correction::parse('b', '?')), plain);
    }

    // ========================================================================
    // GAP 4: Grid assembly
    // ========================================================================

    /// If this breaks, it means: the sampler is walking columns first or
    /// otherwise scrambling the row-major contract.
    #[test]
    fn test_two_by_two_grid_is_row_major() {
        let grid = PixelGrid::new(
            2,
            2,
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 255),
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
            ],
        )
        .unwrap();
        assert_eq!(classify_grid(&grid, None).as_str(), "01rg");
    }

    /// If this breaks, it means: some rows or pixels are dropped or
    /// duplicated for non-square grids.
    #[test]
    fn test_output_length_for_any_dimensions() {
        for width in [1usize, 2, 3, 17, 50] {
            for height in [1usize, 4, 50] {
                let grid = PixelGrid::filled(width, height, Rgb::new(12, 200, 99)).unwrap();
                let out = GridClassifier::new()
                    .correct(Symbol::Green, Symbol::Blue)
                    .classify(&grid);
                assert_eq!(out.as_str().chars().count(), width * height);
            }
        }
    }

    /// If this breaks, it means: column-major iteration. A 3x2 grid whose
    /// columns differ but rows do not would read `rgbrgb` row-major and
    /// `rrggbb` column-major.
    #[test]
    fn test_non_square_grid_order() {
        let row = [Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)];
        let pixels = row.iter().chain(row.iter()).copied().collect();
        let grid = PixelGrid::new(3, 2, pixels).unwrap();
        assert_eq!(classify_grid(&grid, None).as_str(), "rgbrgb");
    }
}

//! Correction overlay: remap one palette symbol to another.
//!
//! A [`Correction`] is a per-run `(from, to)` rule. It redirects a pixel to
//! `to` in three independent situations, each reported through
//! [`CorrectionStage`]:
//!
//! - the pixel's own HSV is within [`CORRECTION_THRESHOLD`] of `from`'s
//!   reference HSV (checked before band matching and short-circuits it);
//! - a band assigned some other symbol whose *reference* HSV is within the
//!   threshold of `from`'s reference (compares two palette entries, not the
//!   pixel);
//! - the fallback picked some other symbol, but the pixel's RGB distance to
//!   `from`'s reference is less than [`FALLBACK_CORRECTION_FACTOR`] times the
//!   winning distance.
//!
//! The second check never fires for the built-in palette, whose reference
//! hues are all more than a degree apart.

use crate::classify::Classification;
use crate::color::{Hsv, Rgb};
use crate::palette::Symbol;

/// Maximum HSV distance for the pixel-level and band-level checks (exclusive).
pub const CORRECTION_THRESHOLD: f64 = 0.4;

/// Fallback redirects when `distance(pixel, from) < factor * nearest_distance`.
pub const FALLBACK_CORRECTION_FACTOR: f64 = 1.5;

/// Which check redirected a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionStage {
    /// Pixel HSV was near the source reference; bands were never consulted.
    PixelNearSource,
    /// The matched band's reference was near the source reference.
    BandNearSource,
    /// The fallback's relaxed distance policy preferred the source.
    FallbackNearSource,
}

/// A validated `(from, to)` remapping rule.
///
/// # Example
///
/// ```
/// use hue_palette::{classify_pixel, Correction, Rgb, Symbol};
///
/// let correction = Correction::new(Symbol::Blue, Symbol::Purple).unwrap();
/// let pure_blue = Rgb::new(0, 0, 255);
/// assert_eq!(classify_pixel(pure_blue, Some(&correction)).symbol(), Symbol::Purple);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correction {
    from: Symbol,
    to: Symbol,
    from_hsv: Hsv,
}

impl Correction {
    /// Build a rule. Returns `None` when `from == to`, which would leave
    /// every result unchanged.
    pub fn new(from: Symbol, to: Symbol) -> Option<Self> {
        if from == to {
            return None;
        }
        Some(Self {
            from,
            to,
            from_hsv: from.reference_hsv(),
        })
    }

    /// Build a rule from raw symbol characters.
    ///
    /// Characters outside the palette yield `None` (no correction) rather
    /// than an error.
    ///
    /// ```
    /// use hue_palette::Correction;
    /// assert!(Correction::parse('b', 'p').is_some());
    /// assert!(Correction::parse('x', 'p').is_none());
    /// assert!(Correction::parse('b', 'b').is_none());
    /// ```
    pub fn parse(from: char, to: char) -> Option<Self> {
        let from = Symbol::try_from(from).ok()?;
        let to = Symbol::try_from(to).ok()?;
        Self::new(from, to)
    }

    /// Build a rule from an optional pair, as read from configuration.
    pub fn from_pair(pair: Option<(Symbol, Symbol)>) -> Option<Self> {
        pair.and_then(|(from, to)| Self::new(from, to))
    }

    #[inline]
    pub fn from(&self) -> Symbol {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Symbol {
        self.to
    }

    /// Pixel-level check: is the pixel itself close to the source color?
    #[inline]
    pub fn captures_pixel(&self, hsv: Hsv) -> bool {
        hsv.distance(self.from_hsv) < CORRECTION_THRESHOLD
    }

    /// Band-level check on an assigned symbol other than the source.
    #[inline]
    pub fn captures_band(&self, assigned: Symbol) -> bool {
        assigned != self.from
            && assigned.reference_hsv().distance(self.from_hsv) < CORRECTION_THRESHOLD
    }

    /// Fallback check with the relaxed distance policy.
    #[inline]
    pub fn captures_fallback(&self, rgb: Rgb, nearest: Symbol, nearest_distance: f64) -> bool {
        nearest != self.from
            && rgb.distance(self.from.reference())
                < nearest_distance * FALLBACK_CORRECTION_FACTOR
    }

    /// Apply the band-level and fallback re-checks to an uncorrected result.
    pub fn overlay(&self, rgb: Rgb, base: Classification) -> Classification {
        let redirected = match base {
            Classification::Band(symbol) if self.captures_band(symbol) => {
                Some(CorrectionStage::BandNearSource)
            }
            Classification::Fallback { symbol, distance }
                if self.captures_fallback(rgb, symbol, distance) =>
            {
                Some(CorrectionStage::FallbackNearSource)
            }
            _ => None,
        };

        match redirected {
            Some(stage) => Classification::Corrected {
                symbol: self.to,
                stage,
            },
            None => base,
        }
    }
}

//! HSV classification bands.
//!
//! Bands overlap at their edges (hue 30 is both red and orange, 45 both orange
//! and yellow, and so on). [`BANDS`] is therefore an ordered list rather than a
//! map: the first band that contains a color wins.

use super::symbol::Symbol;
use crate::color::Hsv;

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }
}

/// Hue constraint of a band, in degrees.
///
/// A range whose `start` is greater than its `end` wraps through 0°/360°.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRange {
    pub start: f64,
    pub end: f64,
}

impl HueRange {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Both endpoints are inclusive.
    ///
    /// ```
    /// use hue_palette::HueRange;
    /// let red = HueRange::new(330.0, 30.0);
    /// assert!(red.contains(350.0));
    /// assert!(red.contains(0.0));
    /// assert!(red.contains(30.0));
    /// assert!(!red.contains(31.0));
    /// ```
    #[inline]
    pub fn contains(self, h: f64) -> bool {
        if self.start <= self.end {
            self.start <= h && h <= self.end
        } else {
            h >= self.start || h <= self.end
        }
    }

    #[inline]
    pub fn wraps(self) -> bool {
        self.start > self.end
    }
}

/// The HSV region that classifies to one symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub symbol: Symbol,
    /// `None` for black and white, which ignore hue.
    pub hue: Option<HueRange>,
    pub saturation: Interval,
    pub value: Interval,
}

const CHROMA_S: Interval = Interval::new(0.3, 1.0);
const CHROMA_V: Interval = Interval::new(0.3, 1.0);

const fn chromatic(symbol: Symbol, start: f64, end: f64) -> Band {
    Band {
        symbol,
        hue: Some(HueRange::new(start, end)),
        saturation: CHROMA_S,
        value: CHROMA_V,
    }
}

/// Classification bands in canonical matching order.
pub const BANDS: [Band; 9] = [
    Band {
        symbol: Symbol::Black,
        hue: None,
        saturation: Interval::new(0.0, 0.1),
        value: Interval::new(0.0, 0.2),
    },
    Band {
        symbol: Symbol::White,
        hue: None,
        saturation: Interval::new(0.0, 0.1),
        value: Interval::new(0.8, 1.0),
    },
    chromatic(Symbol::Red, 330.0, 30.0),
    chromatic(Symbol::Orange, 15.0, 45.0),
    chromatic(Symbol::Yellow, 45.0, 75.0),
    chromatic(Symbol::Green, 75.0, 165.0),
    chromatic(Symbol::Blue, 195.0, 255.0),
    chromatic(Symbol::Teal, 165.0, 195.0),
    chromatic(Symbol::Purple, 255.0, 330.0),
];

impl Band {
    /// All three constraints must hold.
    #[inline]
    pub fn contains(&self, hsv: Hsv) -> bool {
        let hue_ok = self.hue.map_or(true, |range| range.contains(hsv.h));
        hue_ok && self.saturation.contains(hsv.s) && self.value.contains(hsv.v)
    }

    /// Look up the band for a symbol.
    pub fn for_symbol(symbol: Symbol) -> &'static Band {
        &BANDS[symbol.index()]
    }
}

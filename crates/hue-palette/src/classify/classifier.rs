//! Band matching and nearest-reference fallback.

use super::correction::{Correction, CorrectionStage};
use crate::color::{Hsv, Rgb};
use crate::palette::{Symbol, BANDS};

/// How a pixel's symbol was decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// The first band containing the pixel's HSV.
    Band(Symbol),
    /// No band matched; `symbol` has the nearest reference color, `distance`
    /// is the RGB distance to it.
    Fallback { symbol: Symbol, distance: f64 },
    /// A correction rule redirected the pixel.
    Corrected {
        symbol: Symbol,
        stage: CorrectionStage,
    },
}

impl Classification {
    /// The symbol written to the output.
    #[inline]
    pub fn symbol(self) -> Symbol {
        match self {
            Classification::Band(symbol)
            | Classification::Fallback { symbol, .. }
            | Classification::Corrected { symbol, .. } => symbol,
        }
    }

    #[inline]
    pub fn is_corrected(self) -> bool {
        matches!(self, Classification::Corrected { .. })
    }
}

/// First band in canonical order that contains `hsv`.
///
/// ```
/// use hue_palette::{match_band, Hsv, Symbol};
/// // Hue 30 sits on the red/orange boundary; red comes first.
/// assert_eq!(match_band(Hsv::new(30.0, 0.8, 0.8)), Some(Symbol::Red));
/// // Mid grey is neither black, white nor saturated enough for a hue band.
/// assert_eq!(match_band(Hsv::new(0.0, 0.0, 0.5)), None);
/// ```
#[inline]
pub fn match_band(hsv: Hsv) -> Option<Symbol> {
    BANDS
        .iter()
        .find(|band| band.contains(hsv))
        .map(|band| band.symbol)
}

/// Reference color nearest to `rgb` in raw RGB space.
///
/// Uses a strict `<` so the earliest symbol in canonical order wins ties.
pub fn nearest_reference(rgb: Rgb) -> (Symbol, f64) {
    let mut best = Symbol::Black;
    let mut best_distance = f64::INFINITY;

    for symbol in Symbol::ALL {
        let distance = rgb.distance(symbol.reference());
        if distance < best_distance {
            best_distance = distance;
            best = symbol;
        }
    }

    (best, best_distance)
}

/// Classify a pixel with no correction rule.
///
/// Total: every input yields a band match or a fallback.
///
/// ```
/// use hue_palette::{classify, Rgb, Symbol};
/// assert_eq!(classify(Rgb::new(255, 0, 0)).symbol(), Symbol::Red);
/// assert_eq!(classify(Rgb::new(100, 100, 100)).symbol(), Symbol::Black);
/// ```
#[inline]
pub fn classify(rgb: Rgb) -> Classification {
    classify_pixel(rgb, None)
}

/// Classify a pixel, converting to HSV first.
#[inline]
pub fn classify_pixel(rgb: Rgb, correction: Option<&Correction>) -> Classification {
    classify_hsv(rgb, Hsv::from(rgb), correction)
}

/// Classify a pixel whose HSV has already been computed.
///
/// `hsv` drives band matching and the pixel-level correction check; `rgb`
/// drives the fallback. Callers normally pass `Hsv::from(rgb)`.
pub fn classify_hsv(rgb: Rgb, hsv: Hsv, correction: Option<&Correction>) -> Classification {
    if let Some(correction) = correction {
        if correction.captures_pixel(hsv) {
            return Classification::Corrected {
                symbol: correction.to(),
                stage: CorrectionStage::PixelNearSource,
            };
        }
    }

    let base = match match_band(hsv) {
        Some(symbol) => Classification::Band(symbol),
        None => {
            let (symbol, distance) = nearest_reference(rgb);
            Classification::Fallback { symbol, distance }
        }
    };

    match correction {
        Some(correction) => correction.overlay(rgb, base),
        None => base,
    }
}

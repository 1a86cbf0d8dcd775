//! GridClassifier builder -- the primary ergonomic entry point for the crate.
//!
//! [`GridClassifier`] wraps grid classification with fluent configuration of
//! the correction rule and execution mode.

use crate::classify::Correction;
use crate::color::Rgb;
use crate::grid::{classify_grid, PixelGrid, SymbolGrid};
use crate::palette::Symbol;

use super::error::ClassifyError;

/// High-level grid classifier.
///
/// - Configuration methods consume and return `self`
/// - [`classify()`](Self::classify) takes `&self` so the builder is reusable
///   across images
///
/// # Example
///
/// ```
/// use hue_palette::{GridClassifier, PixelGrid, Rgb, Symbol};
///
/// let classifier = GridClassifier::new().correct(Symbol::Blue, Symbol::Purple);
///
/// let grid = PixelGrid::filled(2, 2, Rgb::new(0, 0, 255)).unwrap();
/// assert_eq!(classifier.classify(&grid).as_str(), "pppp");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridClassifier {
    correction: Option<Correction>,
    parallel: bool,
}

impl GridClassifier {
    /// No correction, sequential execution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the correction rule.
    #[inline]
    pub fn correction(mut self, correction: Option<Correction>) -> Self {
        self.correction = correction;
        self
    }

    /// Remap `from` to `to`. A rule with `from == to` clears the correction.
    #[inline]
    pub fn correct(mut self, from: Symbol, to: Symbol) -> Self {
        self.correction = Correction::new(from, to);
        self
    }

    /// Classify rows concurrently.
    ///
    /// Has no effect unless the crate is built with the `parallel` feature.
    /// Output is identical either way.
    #[inline]
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    #[inline]
    pub fn active_correction(&self) -> Option<Correction> {
        self.correction
    }

    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Classify a validated grid.
    pub fn classify(&self, grid: &PixelGrid) -> SymbolGrid {
        #[cfg(feature = "parallel")]
        if self.parallel {
            return crate::grid::classify_grid_parallel(grid, self.correction);
        }

        classify_grid(grid, self.correction)
    }

    /// Validate raw pixels as a grid, then classify.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::Grid`] if the pixel count does not equal
    /// `width * height` or either dimension is zero.
    pub fn classify_pixels(
        &self,
        pixels: Vec<Rgb>,
        width: usize,
        height: usize,
    ) -> Result<SymbolGrid, ClassifyError> {
        let grid = PixelGrid::new(width, height, pixels)?;
        Ok(self.classify(&grid))
    }
}

//! SymbolGrid: the classified output.
//!
//! Stores one [`Symbol`] per pixel in row-major order plus the rendered
//! string, which is what downstream consumers paste or submit.

use std::fmt;

use crate::palette::Symbol;

/// The canonical output of grid classification.
///
/// # Example
///
/// ```
/// use hue_palette::{Symbol, SymbolGrid};
///
/// let grid = SymbolGrid::new(
///     vec![Symbol::Black, Symbol::White, Symbol::Red, Symbol::Green],
///     2,
///     2,
/// );
/// assert_eq!(grid.as_str(), "01rg");
/// assert_eq!(grid.rows().collect::<Vec<_>>(), vec!["01", "rg"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrid {
    symbols: Vec<Symbol>,
    text: String,
    width: usize,
    height: usize,
}

impl SymbolGrid {
    /// Wrap classified symbols.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `symbols.len() == width * height`.
    pub fn new(symbols: Vec<Symbol>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            symbols.len(),
            width * height,
            "symbols length ({}) must match width * height ({}x{}={})",
            symbols.len(),
            width,
            height,
            width * height,
        );
        let text = symbols.iter().map(|s| s.as_char()).collect();
        Self {
            symbols,
            text,
            width,
            height,
        }
    }

    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The output string, one ASCII character per pixel.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of symbols; always `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The output split into rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        let width = self.width;
        (0..self.height).map(move |y| &self.text[y * width..(y + 1) * width])
    }

    /// Count of each symbol, indexed by [`Symbol::index`].
    pub fn histogram(&self) -> [usize; 9] {
        let mut counts = [0usize; 9];
        for symbol in &self.symbols {
            counts[symbol.index()] += 1;
        }
        counts
    }

    /// Packed RGB8 rendering using each symbol's reference color.
    ///
    /// The buffer has length `width * height * 3`.
    pub fn to_rgb_preview(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.symbols.len() * 3);
        for symbol in &self.symbols {
            rgb.extend_from_slice(&symbol.reference().to_bytes());
        }
        rgb
    }
}

impl fmt::Display for SymbolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<SymbolGrid> for String {
    fn from(grid: SymbolGrid) -> String {
        grid.into_string()
    }
}

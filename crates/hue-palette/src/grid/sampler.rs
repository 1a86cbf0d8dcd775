//! Row-major grid classification.

use super::pixel_grid::PixelGrid;
use super::symbol_grid::SymbolGrid;
use crate::classify::{classify_pixel, Correction};
use crate::color::Rgb;
use crate::palette::Symbol;

/// Classify every pixel, y outer and x inner.
///
/// Each pixel is classified independently; the output position of a symbol
/// is its pixel's row-major index.
///
/// ```
/// use hue_palette::{classify_grid, PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(
///     2,
///     2,
///     vec![
///         Rgb::new(0, 0, 0),
///         Rgb::new(255, 255, 255),
///         Rgb::new(255, 0, 0),
///         Rgb::new(0, 255, 0),
///     ],
/// )
/// .unwrap();
/// assert_eq!(classify_grid(&grid, None).as_str(), "01rg");
/// ```
pub fn classify_grid(grid: &PixelGrid, correction: Option<Correction>) -> SymbolGrid {
    let correction = correction.as_ref();
    let mut symbols = Vec::with_capacity(grid.len());

    for row in grid.rows() {
        symbols.extend(classify_row(row, correction));
    }

    SymbolGrid::new(symbols, grid.width(), grid.height())
}

/// Classify rows on the rayon thread pool.
///
/// Rows are classified independently and reassembled in their original
/// order, so the result equals [`classify_grid`].
#[cfg(feature = "parallel")]
pub fn classify_grid_parallel(grid: &PixelGrid, correction: Option<Correction>) -> SymbolGrid {
    use rayon::prelude::*;

    let correction = correction.as_ref();
    let rows: Vec<Vec<Symbol>> = grid
        .pixels()
        .par_chunks(grid.width())
        .map(|row| classify_row(row, correction))
        .collect();

    SymbolGrid::new(rows.concat(), grid.width(), grid.height())
}

fn classify_row(row: &[Rgb], correction: Option<&Correction>) -> Vec<Symbol> {
    row.iter()
        .map(|&rgb| classify_pixel(rgb, correction).symbol())
        .collect()
}

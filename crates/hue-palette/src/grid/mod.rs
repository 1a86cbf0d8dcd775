//! Pixel grids in, symbol grids out.
//!
//! [`PixelGrid`] is the caller-decoded input: exactly `width * height` pixels in
//! row-major order. [`classify_grid`] walks it row by row and produces a
//! [`SymbolGrid`] whose string form is the tool's output.

mod error;
mod pixel_grid;
mod sampler;
mod symbol_grid;

pub use error::GridError;
pub use pixel_grid::PixelGrid;
pub use sampler::classify_grid;
#[cfg(feature = "parallel")]
pub use sampler::classify_grid_parallel;
pub use symbol_grid::SymbolGrid;

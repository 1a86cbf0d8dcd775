//! Unified error type for the hue-palette public API.
//!
//! [`ClassifyError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::grid::GridError;
use crate::palette::{ParseColorError, ParseSymbolError};
use std::fmt;

/// Unified error type for the hue-palette public API.
///
/// Classification itself never fails; these errors come from building its
/// inputs.
///
/// # Example
///
/// ```
/// use hue_palette::{ClassifyError, PixelGrid, Rgb, Symbol};
///
/// fn build() -> Result<PixelGrid, ClassifyError> {
///     let from: Symbol = "b".parse()?;
///     let color: Rgb = "#0000FF".parse()?;
///     assert_eq!(from.reference(), color);
///     Ok(PixelGrid::filled(2, 2, color)?)
/// }
/// assert!(build().is_ok());
/// ```
#[derive(Debug)]
pub enum ClassifyError {
    /// Pixel buffer does not form a valid grid
    Grid(GridError),
    /// Symbol parsing error (not one of `01roygbtp`)
    ParseSymbol(ParseSymbolError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::Grid(err) => write!(f, "grid error: {}", err),
            ClassifyError::ParseSymbol(err) => write!(f, "symbol parse error: {}", err),
            ClassifyError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClassifyError::Grid(err) => Some(err),
            ClassifyError::ParseSymbol(err) => Some(err),
            ClassifyError::ParseColor(err) => Some(err),
        }
    }
}

impl From<GridError> for ClassifyError {
    fn from(err: GridError) -> Self {
        ClassifyError::Grid(err)
    }
}

impl From<ParseSymbolError> for ClassifyError {
    fn from(err: ParseSymbolError) -> Self {
        ClassifyError::ParseSymbol(err)
    }
}

impl From<ParseColorError> for ClassifyError {
    fn from(err: ParseColorError) -> Self {
        ClassifyError::ParseColor(err)
    }
}

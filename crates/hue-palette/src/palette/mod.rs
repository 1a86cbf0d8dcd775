//! The fixed nine-symbol palette and its classification bands
//!
//! This module provides the symbol alphabet, the reference color for each
//! symbol, the ordered HSV band table, and error types for parsing symbols
//! and colors.

mod band;
mod error;
mod symbol;

pub use band::{Band, HueRange, Interval, BANDS};
pub use error::{ParseColorError, ParseSymbolError};
pub use symbol::Symbol;

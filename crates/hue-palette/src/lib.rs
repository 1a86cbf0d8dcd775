#![allow(clippy::manual_range_contains)]

//! hue-palette: nine-symbol color classification for downsampled images
//!
//! This library turns a grid of RGB pixels into a string over a fixed
//! alphabet of nine color symbols, one symbol per pixel, row-major.
//!
//! # Quick Start
//!
//! The [`GridClassifier`] builder is the primary entry point:
//!
//! ```
//! use hue_palette::{GridClassifier, PixelGrid, Rgb};
//!
//! let grid = PixelGrid::new(
//!     2,
//!     2,
//!     vec![
//!         Rgb::new(0, 0, 0),
//!         Rgb::new(255, 255, 255),
//!         Rgb::new(255, 0, 0),
//!         Rgb::new(0, 255, 0),
//!     ],
//! )
//! .unwrap();
//!
//! let result = GridClassifier::new().classify(&grid);
//! assert_eq!(result.as_str(), "01rg");
//! ```
//!
//! # The Palette
//!
//! | Symbol | Name   | Reference |
//! |--------|--------|-----------|
//! | `0`    | black  | `#000000` |
//! | `1`    | white  | `#FFFFFF` |
//! | `r`    | red    | `#FF0000` |
//! | `o`    | orange | `#FFA500` |
//! | `y`    | yellow | `#FFFF00` |
//! | `g`    | green  | `#00FF00` |
//! | `b`    | blue   | `#0000FF` |
//! | `t`    | teal   | `#00FFFF` |
//! | `p`    | purple | `#FF00FF` |
//!
//! # Classification
//!
//! Each pixel is converted to HSV and tested against [`BANDS`] in the order
//! above. Chromatic bands require saturation and value of at least 0.3 and a
//! hue in their range:
//!
//! ```text
//! red     330 .. 30   (wraps through 0)
//! orange   15 .. 45
//! yellow   45 .. 75
//! green    75 .. 165
//! blue    195 .. 255
//! teal    165 .. 195
//! purple  255 .. 330
//! ```
//!
//! Black needs `s <= 0.1, v <= 0.2`; white needs `s <= 0.1, v >= 0.8`.
//! Ranges are inclusive and overlap at their edges, so order decides:
//! hue 30 is red, hue 195 is blue.
//!
//! Pixels matching no band (mid greys, dark saturated colors) take the
//! reference color nearest in raw RGB distance, earliest symbol on ties.
//!
//! # Correction
//!
//! A [`Correction`] remaps one symbol to another for pixels close to the
//! source symbol's reference color. See the [`classify`](mod@classify) module
//! for the exact rules.
//!
//! # Parallelism
//!
//! Pixels are classified independently. With the `parallel` feature,
//! [`GridClassifier::parallel`] spreads rows across the rayon pool and
//! reassembles them in order.

pub mod api;
pub mod classify;
pub mod color;
pub mod grid;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use api::{ClassifyError, GridClassifier};
pub use classify::{
    classify, classify_hsv, classify_pixel, match_band, nearest_reference, Classification,
    Correction, CorrectionStage, CORRECTION_THRESHOLD,
};
pub use color::{Hsv, Rgb};
pub use grid::{classify_grid, GridError, PixelGrid, SymbolGrid};
pub use palette::{Band, HueRange, ParseColorError, ParseSymbolError, Symbol, BANDS};

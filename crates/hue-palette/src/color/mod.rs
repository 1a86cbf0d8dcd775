//! Color types and conversion utilities
//!
//! Two representations flow through the classifier:
//!
//! - **Rgb**: the sampled 8-bit pixel. Used for the nearest-reference fallback,
//!   which measures Euclidean distance in raw 0..255 space.
//! - **Hsv**: hue in degrees, saturation and value in 0..=1. Used for band
//!   matching and for the correction overlay's proximity test.
//!
//! # Example
//!
//! ```
//! use hue_palette::{Hsv, Rgb};
//!
//! let orange = Rgb::new(255, 165, 0);
//! let hsv = Hsv::from(orange);
//! assert!((hsv.h - 38.82).abs() < 0.01);
//! assert_eq!(hsv.v, 1.0);
//! ```

mod hsv;
mod rgb;

pub use hsv::Hsv;
pub use rgb::Rgb;

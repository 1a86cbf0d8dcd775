//! Per-pixel classification.
//!
//! A pixel is classified in three stages:
//!
//! 1. **Correction capture**: with a [`Correction`] active, a pixel whose HSV
//!    lies within [`CORRECTION_THRESHOLD`] of the source symbol's reference is
//!    assigned the target symbol immediately.
//! 2. **Band matching**: the first entry of [`BANDS`](crate::palette::BANDS)
//!    containing the pixel's HSV wins.
//! 3. **Fallback**: the reference color nearest in raw RGB space, ties going to
//!    the earlier symbol in canonical order.
//!
//! Stages 2 and 3 each have their own correction re-check, see
//! [`Correction::overlay`]. The result is a tagged [`Classification`] so tests
//! and diagnostics can tell which path produced a symbol.

mod classifier;
mod correction;

pub use classifier::{
    classify, classify_hsv, classify_pixel, match_band, nearest_reference, Classification,
};
pub use correction::{
    Correction, CorrectionStage, CORRECTION_THRESHOLD, FALLBACK_CORRECTION_FACTOR,
};

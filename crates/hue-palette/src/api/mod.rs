//! Public API for the hue-palette crate.
//!
//! This module provides the high-level API: [`GridClassifier`] builder and
//! [`ClassifyError`] unified error type.

mod builder;
mod error;

pub use builder::GridClassifier;
pub use error::ClassifyError;

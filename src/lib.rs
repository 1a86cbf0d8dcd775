//! huestring - images to nine-symbol color strings
//!
//! Application layer over the `hue-palette` classifier: image decoding,
//! discovery, interactive prompts, export and configuration.
//! This library exposes modules for integration testing.

pub mod clipboard;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod error;
pub mod export;
pub mod image_loader;
pub mod interactive;
pub mod preview;

//! Test fixtures: temporary directories populated with small images.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Reference colors used to paint fixtures
pub mod colors {
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const GREEN: [u8; 3] = [0, 255, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const PURPLE: [u8; 3] = [255, 0, 255];
}

/// A temporary directory of images, removed on drop
pub struct ImageDir {
    dir: TempDir,
}

impl ImageDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write an RGB image painted by `paint(x, y)`
    pub fn rgb(&self, name: &str, width: u32, height: u32, paint: impl Fn(u32, u32) -> [u8; 3]) -> PathBuf {
        let path = self.join(name);
        RgbImage::from_fn(width, height, |x, y| Rgb(paint(x, y)))
            .save(&path)
            .expect("write rgb fixture");
        path
    }

    /// Write an RGBA image painted by `paint(x, y)`
    pub fn rgba(&self, name: &str, width: u32, height: u32, paint: impl Fn(u32, u32) -> [u8; 4]) -> PathBuf {
        let path = self.join(name);
        RgbaImage::from_fn(width, height, |x, y| Rgba(paint(x, y)))
            .save(&path)
            .expect("write rgba fixture");
        path
    }

    /// Write a single-color image
    pub fn solid(&self, name: &str, width: u32, height: u32, color: [u8; 3]) -> PathBuf {
        self.rgb(name, width, height, |_, _| color)
    }

    /// The 2x2 grid `0 1 / r g`
    pub fn quadrants(&self, name: &str) -> PathBuf {
        self.rgb(name, 2, 2, |x, y| match (x, y) {
            (0, 0) => colors::BLACK,
            (1, 0) => colors::WHITE,
            (0, 1) => colors::RED,
            _ => colors::GREEN,
        })
    }

    /// Write arbitrary bytes
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }
}

impl Default for ImageDir {
    fn default() -> Self {
        Self::new()
    }
}

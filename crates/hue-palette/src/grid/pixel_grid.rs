//! Validated input grid.

use super::error::GridError;
use crate::color::Rgb;

/// A `width x height` grid of pixels stored row-major.
///
/// # Example
///
/// ```
/// use hue_palette::{PixelGrid, Rgb};
///
/// let grid = PixelGrid::new(2, 1, vec![Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(grid.get(1, 0), Some(Rgb::new(255, 255, 255)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelGrid {
    /// Wrap row-major pixels.
    ///
    /// # Errors
    ///
    /// - [`GridError::EmptyGrid`] if `width` or `height` is zero
    /// - [`GridError::DimensionMismatch`] if `pixels.len() != width * height`,
    ///   or the product overflows `usize`
    pub fn new(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                pixels: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap a packed `[R, G, B, R, G, B, ...]` buffer.
    ///
    /// ```
    /// use hue_palette::PixelGrid;
    /// let grid = PixelGrid::from_rgb_bytes(1, 1, &[255, 0, 0]).unwrap();
    /// assert_eq!(grid.len(), 1);
    /// assert!(PixelGrid::from_rgb_bytes(2, 1, &[255, 0, 0]).is_err());
    /// ```
    pub fn from_rgb_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(3))
            .ok_or(GridError::DimensionMismatch {
                width,
                height,
                pixels: bytes.len() / 3,
            })?;
        if bytes.len() != expected {
            return Err(GridError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Fill a grid with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(GridError::DimensionMismatch {
                width,
                height,
                pixels: 0,
            })?;
        Self::new(width, height, vec![color; len])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed grid; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb]> {
        self.pixels.chunks_exact(self.width)
    }
}

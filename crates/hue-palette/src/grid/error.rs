//! Error type for grid construction.

use std::fmt;

/// Returned when a pixel buffer does not describe a valid grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero
    EmptyGrid {
        width: usize,
        height: usize,
    },
    /// Pixel count differs from `width * height`
    DimensionMismatch {
        width: usize,
        height: usize,
        pixels: usize,
    },
    /// Packed RGB8 buffer length differs from `width * height * 3`
    BufferLength {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid { width, height } => {
                write!(f, "grid dimensions must be positive, got {}x{}", width, height)
            }
            GridError::DimensionMismatch {
                width,
                height,
                pixels,
            } => match width.checked_mul(*height) {
                Some(needed) => write!(
                    f,
                    "{}x{} grid needs {} pixels, got {}",
                    width, height, needed, pixels
                ),
                None => write!(
                    f,
                    "{}x{} grid is too large to address, got {} pixels",
                    width, height, pixels
                ),
            },
            GridError::BufferLength { expected, actual } => {
                write!(f, "RGB buffer length {} does not match expected {}", actual, expected)
            }
        }
    }
}

impl std::error::Error for GridError {}

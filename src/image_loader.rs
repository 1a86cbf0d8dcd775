//! Decode an image file into a classification-ready pixel grid.
//!
//! The image is resized to exactly the requested dimensions, ignoring aspect
//! ratio, then any transparency is flattened onto white.

use hue_palette::{PixelGrid, Rgb};
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

use crate::error::ConvertError;

/// Resampling filter used for downscaling (bicubic)
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Reject zero width or height
pub fn check_dimensions(width: u32, height: u32) -> Result<(), ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Open, decode, resize and flatten an image file.
pub fn load_grid(path: &Path, width: u32, height: u32) -> Result<PixelGrid, ConvertError> {
    check_dimensions(width, height)?;

    if !path.is_file() {
        return Err(ConvertError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(
        path = %path.display(),
        src_width = img.width(),
        src_height = img.height(),
        has_alpha = img.color().has_alpha(),
        "Decoded image"
    );

    grid_from_image(&img, width, height)
}

/// Resize a decoded image and flatten it onto white.
pub fn grid_from_image(
    img: &DynamicImage,
    width: u32,
    height: u32,
) -> Result<PixelGrid, ConvertError> {
    check_dimensions(width, height)?;

    let rgba = if img.width() == width && img.height() == height {
        img.to_rgba8()
    } else {
        img.resize_exact(width, height, RESIZE_FILTER).to_rgba8()
    };

    let pixels = flatten_on_white(&rgba);
    Ok(PixelGrid::new(width as usize, height as usize, pixels)?)
}

/// Composite every pixel over an opaque white background, row-major.
pub fn flatten_on_white(rgba: &RgbaImage) -> Vec<Rgb> {
    rgba.pixels()
        .map(|p| {
            let [r, g, b, a] = p.0;
            Rgb::new(composite(r, a), composite(g, a), composite(b, a))
        })
        .collect()
}

/// `c * a + 255 * (1 - a)` with `a` in 0..=255, rounded to nearest
#[inline]
fn composite(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("No images found in {}", .0.display())]
    NoImages(PathBuf),

    #[error("Grid error: {0}")]
    Grid(#[from] hue_palette::GridError),

    #[error("Could not copy to clipboard: {0}")]
    Clipboard(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Image file to symbol string, end to end.

use hue_palette::{Correction, GridClassifier, SymbolGrid};
use std::path::{Path, PathBuf};

use crate::config::AppConfig;
use crate::error::ConvertError;
use crate::export::Summary;
use crate::image_loader;

/// Parameters for a single conversion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertOptions {
    pub width: u32,
    pub height: u32,
    pub correction: Option<Correction>,
    pub parallel: bool,
}

impl ConvertOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            correction: config.correction(),
            parallel: config.parallel,
        }
    }

    pub fn classifier(&self) -> GridClassifier {
        GridClassifier::new()
            .correction(self.correction)
            .parallel(self.parallel)
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// A converted image
#[derive(Debug, Clone)]
pub struct Conversion {
    pub source: PathBuf,
    pub grid: SymbolGrid,
    pub correction: Option<Correction>,
}

impl Conversion {
    pub fn as_str(&self) -> &str {
        self.grid.as_str()
    }

    pub fn summary(&self) -> Summary {
        Summary::new(&self.grid, self.correction)
    }
}

/// Load, resize, flatten and classify an image file.
pub fn convert_file(path: &Path, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let pixels = image_loader::load_grid(path, options.width, options.height)?;
    let grid = options.classifier().classify(&pixels);

    tracing::info!(
        path = %path.display(),
        width = options.width,
        height = options.height,
        corrected = options.correction.is_some(),
        "Converted image"
    );

    Ok(Conversion {
        source: path.to_path_buf(),
        grid,
        correction: options.correction,
    })
}

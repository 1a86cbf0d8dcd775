use hue_palette::Correction;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::export::{ExportFormat, ExportKind};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "huestring.yaml";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV: &str = "HUESTRING_CONFIG";

/// Annotated default config written by `huestring init`
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../huestring.yaml");

/// Application configuration loaded from huestring.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Output grid width in symbols
    #[serde(default = "default_size")]
    pub width: u32,

    /// Output grid height in symbols
    #[serde(default = "default_size")]
    pub height: u32,

    /// File extensions considered images during discovery
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Optional symbol remapping
    #[serde(default)]
    pub correction: Option<CorrectionConfig>,

    /// Classify rows concurrently
    #[serde(default)]
    pub parallel: bool,

    #[serde(default)]
    pub export: ExportConfig,
}

fn default_size() -> u32 {
    50
}

fn default_extensions() -> Vec<String> {
    ["png", "jpg", "jpeg", "bmp", "gif", "tiff"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_key() -> String {
    "submit-image".to_string()
}

/// Correction rule as written in the config file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CorrectionConfig {
    pub from: String,
    pub to: String,
}

impl CorrectionConfig {
    /// Resolve to a correction. Anything other than two valid distinct
    /// symbols yields `None`.
    pub fn resolve(&self) -> Option<Correction> {
        let from = single_char(&self.from)?;
        let to = single_char(&self.to)?;
        Correction::parse(from, to)
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Export settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    #[serde(default)]
    pub format: ExportKind,

    /// Key for the local-storage snippet
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: ExportKind::default(),
            key: default_key(),
        }
    }
}

impl ExportConfig {
    pub fn format(&self) -> ExportFormat {
        ExportFormat::from_kind(self.format, &self.key)
    }
}

impl AppConfig {
    /// Path to read: explicit argument, then `HUESTRING_CONFIG`, then
    /// `huestring.yaml` in the working directory.
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = Self::resolve_path(explicit);
        let is_default_location = explicit.is_none() && std::env::var_os(CONFIG_ENV).is_none();

        if is_default_location && !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Self::default();
        }

        Self::load_from_path(&path)
    }

    /// Load a specific file, falling back to defaults on any failure
    pub fn load_from_path(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        width = config.width,
                        height = config.height,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Reject zero dimensions
    pub fn validate(&self) -> Result<(), ConvertError> {
        crate::image_loader::check_dimensions(self.width, self.height)
    }

    /// Configured correction, if any. Invalid rules are dropped with a warning.
    pub fn correction(&self) -> Option<Correction> {
        let rule = self.correction.as_ref()?;
        let resolved = rule.resolve();
        if resolved.is_none() && rule.from.trim() != rule.to.trim() {
            tracing::warn!(
                from = %rule.from,
                to = %rule.to,
                "Invalid correction in config, using normal mode"
            );
        }
        resolved
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: default_size(),
            height: default_size(),
            extensions: default_extensions(),
            correction: None,
            parallel: false,
            export: ExportConfig::default(),
        }
    }
}

//! Render a converted string for the user and write it out.

use hue_palette::{Correction, SymbolGrid};
use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::path::Path;

use crate::error::ConvertError;

/// Default key for the local-storage snippet
pub const DEFAULT_STORAGE_KEY: &str = "submit-image";

/// Output format selector, as named on the command line and in config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    /// The bare symbol string
    #[default]
    Raw,
    /// A browser console statement storing the string in localStorage
    LocalStorage,
}

/// Fully resolved output format
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Raw,
    LocalStorage { key: String },
}

impl ExportFormat {
    pub fn from_kind(kind: ExportKind, key: &str) -> Self {
        match kind {
            ExportKind::Raw => ExportFormat::Raw,
            ExportKind::LocalStorage => ExportFormat::LocalStorage {
                key: key.to_string(),
            },
        }
    }

    /// Format the symbol string. The alphabet never needs escaping; the key
    /// is escaped as a JavaScript string literal.
    pub fn render(&self, symbols: &str) -> String {
        match self {
            ExportFormat::Raw => symbols.to_string(),
            ExportFormat::LocalStorage { key } => {
                format!("localStorage[\"{}\"] = \"{}\"", escape_js(key), symbols)
            }
        }
    }
}

fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out
}

/// "normal" or e.g. "B → P correction"
pub fn mode_label(correction: Option<Correction>) -> String {
    match correction {
        None => "normal".to_string(),
        Some(c) => format!(
            "{} → {} correction",
            c.from().as_char().to_ascii_uppercase(),
            c.to().as_char().to_ascii_uppercase()
        ),
    }
}

/// Conversion report printed alongside the string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub mode: String,
    pub length: usize,
    pub width: usize,
    pub height: usize,
}

impl Summary {
    pub fn new(grid: &SymbolGrid, correction: Option<Correction>) -> Self {
        Self {
            mode: mode_label(correction),
            length: grid.as_str().chars().count(),
            width: grid.width(),
            height: grid.height(),
        }
    }

    pub fn expected(&self) -> usize {
        self.width * self.height
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mode: {}", self.mode)?;
        writeln!(f, "String length: {}", self.length)?;
        write!(
            f,
            "Expected length for {}x{}: {}",
            self.width,
            self.height,
            self.expected()
        )
    }
}

/// Per-symbol counts, one line each, skipping absent symbols
pub fn histogram_report(grid: &SymbolGrid) -> String {
    let counts = grid.histogram();
    hue_palette::Symbol::ALL
        .iter()
        .zip(counts.iter())
        .filter(|(_, n)| **n > 0)
        .map(|(symbol, n)| format!("{} {:<6} {}", symbol, symbol.name(), n))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write to a file, or stdout when no path is given
pub fn write_output(text: &str, output: Option<&Path>) -> Result<(), ConvertError> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))?;
            tracing::info!(path = %path.display(), bytes = text.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
    }
    Ok(())
}

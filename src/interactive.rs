//! Prompt-driven conversion: pick an image, pick a correction, convert.

use hue_palette::{Correction, Symbol};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::clipboard::{copy_or_report, Clipboard};
use crate::config::AppConfig;
use crate::convert::{convert_file, Conversion, ConvertOptions};
use crate::discovery::{available_images, display_name, resolve_choice};
use crate::error::ConvertError;
use crate::export::ExportFormat;

/// A correction menu answer that cannot be used
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid input")]
    NotANumber,

    #[error("Invalid choice")]
    OutOfRange(i64),
}

/// Step 1 answer: `0` is normal mode, `1..=7` picks the color to correct.
pub fn parse_source_choice(input: &str) -> Result<Option<Symbol>, MenuError> {
    match parse_number(input)? {
        0 => Ok(None),
        n => menu_symbol(n).map(Some),
    }
}

/// Step 2 answer: `1..=7` picks the replacement color.
pub fn parse_target_choice(input: &str) -> Result<Symbol, MenuError> {
    menu_symbol(parse_number(input)?)
}

fn parse_number(input: &str) -> Result<i64, MenuError> {
    input.trim().parse().map_err(|_| MenuError::NotANumber)
}

fn menu_symbol(n: i64) -> Result<Symbol, MenuError> {
    usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Symbol::CORRECTABLE.get(i).copied())
        .ok_or(MenuError::OutOfRange(n))
}

/// One interactive run over arbitrary input and output streams
pub struct Session<'a, R, W> {
    input: R,
    output: W,
    config: &'a AppConfig,
    dir: PathBuf,
    clipboard: Option<&'a mut dyn Clipboard>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a AppConfig, dir: impl AsRef<Path>) -> Self {
        Self {
            input,
            output,
            config,
            dir: dir.as_ref().to_path_buf(),
            clipboard: None,
        }
    }

    /// Copy the localStorage snippet here once the string is printed
    pub fn with_clipboard(mut self, clipboard: &'a mut dyn Clipboard) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    /// Run the full prompt flow and print the result.
    pub fn run(&mut self) -> Result<Conversion, ConvertError> {
        let path = self.choose_image()?;
        let correction = self.choose_correction()?;

        let options = ConvertOptions {
            correction,
            ..ConvertOptions::from_config(self.config)
        };
        let conversion = convert_file(&path, &options)?;
        let summary = conversion.summary();

        let mode = match correction {
            None => " (normal mode)".to_string(),
            Some(_) => format!(" ({})", summary.mode),
        };
        writeln!(self.output, "\nConverted image to string{mode}:")?;
        writeln!(self.output, "\"{}\"", conversion.as_str())?;
        writeln!(self.output, "\nString length: {}", summary.length)?;
        writeln!(
            self.output,
            "Expected length for {}x{}: {}",
            summary.width,
            summary.height,
            summary.expected()
        )?;

        let format = self.config.export.format();
        if format != ExportFormat::Raw {
            writeln!(self.output, "\n{}", format.render(conversion.as_str()))?;
        }

        if let Some(clipboard) = self.clipboard.as_deref_mut() {
            let snippet = ExportFormat::LocalStorage {
                key: self.config.export.key.clone(),
            }
            .render(conversion.as_str());
            writeln!(self.output, "\n{}", copy_or_report(clipboard, &snippet))?;
        }

        Ok(conversion)
    }

    fn choose_image(&mut self) -> Result<PathBuf, ConvertError> {
        let images = available_images(&self.dir, &self.config.extensions)?;

        writeln!(self.output, "Available images in {}:", self.dir.display())?;
        if images.is_empty() {
            writeln!(self.output, "No image files found")?;
        }
        for (i, path) in images.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, display_name(path))?;
        }

        let answer = self.prompt("\nEnter image filename or number:\n> ")?;
        let path = resolve_choice(&answer, &images, &self.dir)?;
        if !path.is_file() {
            return Err(ConvertError::NotFound(path));
        }
        Ok(path)
    }

    fn choose_correction(&mut self) -> Result<Option<Correction>, ConvertError> {
        writeln!(self.output, "\nChoose color correction mode:")?;
        writeln!(self.output, "0. Normal mode (no correction)")?;
        for (i, symbol) in Symbol::CORRECTABLE.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, capitalize(symbol.name()))?;
        }

        let answer =
            self.prompt("\nStep 1: Which color in the image should be corrected?\nEnter choice (0-7): ")?;
        let from = match parse_source_choice(&answer) {
            Ok(Some(from)) => from,
            Ok(None) => return Ok(None),
            Err(e) => return self.normal_mode(e),
        };

        let question = format!(
            "\nStep 2: What should {} be converted to?\nEnter choice (1-7): ",
            from.as_char().to_ascii_uppercase()
        );
        let answer = self.prompt(&question)?;
        let to = match parse_target_choice(&answer) {
            Ok(to) => to,
            Err(e) => return self.normal_mode(e),
        };

        // from == to also lands in normal mode
        Ok(Correction::new(from, to))
    }

    fn normal_mode(&mut self, reason: MenuError) -> Result<Option<Correction>, ConvertError> {
        tracing::debug!(%reason, "Correction menu answer rejected");
        writeln!(self.output, "{reason}, using normal mode")?;
        Ok(None)
    }

    fn prompt(&mut self, text: &str) -> Result<String, ConvertError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

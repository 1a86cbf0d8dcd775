use crate::error::ConvertError;

/// Destination for copied output
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<(), ConvertError>;
}

/// The desktop clipboard
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ConvertError> {
        // Opened lazily so headless runs only fail when a copy is attempted
        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(|e| ConvertError::Clipboard(e.to_string()))?,
        };
        let clipboard = self.inner.insert(clipboard);
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ConvertError::Clipboard(e.to_string()))?;
        tracing::debug!(bytes = text.len(), "Copied to clipboard");
        Ok(())
    }
}

/// In-memory clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ConvertError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Copy `text`, turning failure into a user-facing message instead of an
/// error. Returns the line to print.
pub fn copy_or_report(clipboard: &mut dyn Clipboard, text: &str) -> String {
    match clipboard.set_text(text) {
        Ok(()) => "✓ Copied to clipboard".to_string(),
        Err(e) => {
            tracing::warn!(%e, "Clipboard copy failed");
            format!("{e}\nYou can manually copy the string above.")
        }
    }
}

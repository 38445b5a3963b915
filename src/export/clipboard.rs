use arboard::Clipboard;

use crate::error::{DigestError, Result};

/// Something that can receive exported text
pub trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard, via arboard. Opened on each copy.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new()
            .map_err(|e| DigestError::Clipboard(format!("clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(text)
            .map_err(|e| DigestError::Clipboard(format!("failed to set contents: {}", e)))
    }
}

/// Copy `text` through `provider`, refusing empty documents
pub fn copy_with(provider: &mut dyn ClipboardProvider, text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(DigestError::Clipboard(
            "cannot copy an empty document".to_string(),
        ));
    }
    provider.set_text(text)
}

use log::debug;

use super::text::from_string;
use super::{LoadError, LoadedDocument};

/// Loads the clipboard's text contents as a one-chapter book.
pub fn load() -> Result<LoadedDocument, LoadError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    let document = from_string(&text, "clipboard");
    if document.tokens.is_empty() {
        return Err(LoadError::Clipboard("Clipboard holds no text".to_string()));
    }
    debug!("input: clipboard words={}", document.tokens.len());
    Ok(document)
}

use std::path::Path;

use log::debug;

use super::text::single_section;
use super::{ensure_exists, LoadError, LoadedDocument};
use crate::reading::extract_words_from_text;

/// Load text from a PDF file using the pdf-extract crate.
///
/// Page text comes back as plain text, so paragraphs are whatever blank
/// lines pdf-extract emits between blocks.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    ensure_exists(path)?;

    let buffer = std::fs::read(path)?;
    let text = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let tokens = extract_words_from_text(&text);
    if tokens.is_empty() {
        return Err(LoadError::PdfParse(
            "No extractable text content found in PDF".to_string(),
        ));
    }
    debug!("input: pdf path={} words={}", path.display(), tokens.len());

    Ok(LoadedDocument {
        sections: single_section(path, &tokens),
        tokens,
        source: format!("pdf:{}", path.display()),
    })
}

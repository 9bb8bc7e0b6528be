use std::path::Path;

use super::{ensure_exists, LoadError, LoadedDocument};
use crate::reading::{extract_words_from_text, Section, WordToken};

/// Reads a UTF-8 file, rejecting files that hold nothing but whitespace.
pub(crate) fn read_text_file(path: &Path) -> Result<String, LoadError> {
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}

/// One section spanning the whole book, named after the file.
pub(crate) fn single_section(path: &Path, tokens: &[WordToken]) -> Vec<Section> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Text".to_string());
    vec![Section::new(label, 0)]
}

/// Loads a plain-text file. Blank lines separate paragraphs.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    ensure_exists(path)?;
    let content = read_text_file(path)?;
    let tokens = extract_words_from_text(&content);
    Ok(LoadedDocument {
        sections: single_section(path, &tokens),
        tokens,
        source: format!("text:{}", path.display()),
    })
}

/// Builds a document from text already in memory, such as the clipboard.
pub fn from_string(text: &str, source: impl Into<String>) -> LoadedDocument {
    let tokens = extract_words_from_text(text);
    let sections = if tokens.is_empty() {
        Vec::new()
    } else {
        vec![Section::new("Text", 0)]
    };
    LoadedDocument {
        tokens,
        sections,
        source: source.into(),
    }
}

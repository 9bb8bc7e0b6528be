use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::reading::{Section, WordToken};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XHTML parse error: {0}")]
    XhtmlParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// A book ready for reading: its words, its chapter table and a short
/// description of where it came from (`epub:/path/book.epub`).
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub tokens: Vec<WordToken>,
    pub sections: Vec<Section>,
    pub source: String,
}

pub mod clipboard;
pub mod entities;
pub mod epub;
pub mod html;
pub mod pdf;
pub mod text;

fn ensure_exists(path: &Path) -> Result<(), LoadError> {
    if path.exists() {
        Ok(())
    } else {
        Err(LoadError::FileNotFound(path.to_path_buf()))
    }
}

/// Loads a file, choosing the loader from its extension. Files without a
/// recognised extension are read as plain text.
pub fn load_path(path: &Path) -> Result<LoadedDocument, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    debug!("input: load path={} extension={:?}", path.display(), extension);

    match extension.as_str() {
        "epub" => epub::load(path),
        "pdf" => pdf::load(path),
        "xhtml" | "html" | "htm" => html::load(path),
        "mobi" | "azw" | "azw3" | "djvu" => Err(LoadError::UnsupportedFormat(extension)),
        _ => text::load(path),
    }
}

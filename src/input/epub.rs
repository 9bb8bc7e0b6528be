use std::collections::HashMap;
use std::path::Path;

use epub::doc::{EpubDoc, NavPoint};
use log::{debug, warn};

use super::html::parse_document;
use super::{ensure_exists, LoadError, LoadedDocument};
use crate::reading::{extract_words_from_doc, Section, WordToken};

/// Label for the words before the first table-of-contents entry.
const LEADING_SECTION_LABEL: &str = "Start";

/// Archive path without its `#fragment`, as used to match TOC entries to
/// spine chapters.
fn href_key(path: &Path) -> String {
    let path = path.to_string_lossy();
    match path.split_once('#') {
        Some((file, _)) => file.to_string(),
        None => path.into_owned(),
    }
}

/// Depth-first flattening of the table of contents into `(label, href key)`.
fn flatten_toc(points: &[NavPoint]) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut stack: Vec<&NavPoint> = points.iter().rev().collect();
    while let Some(point) = stack.pop() {
        out.push((point.label.trim().to_string(), href_key(&point.content)));
        stack.extend(point.children.iter().rev());
    }
    out
}

/// Maps TOC entries onto token offsets.
///
/// `chapter_starts` maps each spine chapter's href key to the index of its
/// first token. Entries pointing at no known chapter are dropped. The result
/// is ordered by start index, always begins at 0, and keeps only the last
/// entry among several that share a start index.
pub(crate) fn build_sections(
    toc: &[(String, String)],
    chapter_starts: &HashMap<String, usize>,
) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::with_capacity(toc.len() + 1);
    for (label, href) in toc {
        match chapter_starts.get(href) {
            Some(&start) => sections.push(Section::new(label.clone(), start)),
            None => warn!("epub: toc entry {:?} points at unknown chapter {}", label, href),
        }
    }

    sections.sort_by_key(|section| section.start_index);

    let mut deduped: Vec<Section> = Vec::with_capacity(sections.len() + 1);
    for section in sections {
        match deduped.last_mut() {
            Some(last) if last.start_index == section.start_index => *last = section,
            _ => deduped.push(section),
        }
    }

    if deduped.first().map_or(true, |first| first.start_index > 0) {
        deduped.insert(0, Section::new(LEADING_SECTION_LABEL, 0));
    }
    deduped
}

/// Load an EPUB: every spine chapter in reading order, concatenated, with a
/// chapter table built from the book's table of contents.
pub fn load(path: &Path) -> Result<LoadedDocument, LoadError> {
    ensure_exists(path)?;

    let mut doc = EpubDoc::new(path).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }
    debug!("epub: open path={} chapters={}", path.display(), num_chapters);

    let mut tokens: Vec<WordToken> = Vec::new();
    let mut chapter_starts: HashMap<String, usize> = HashMap::new();

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            warn!("epub: skipped chapter {}: not in spine", chapter_idx);
            continue;
        }
        let Some(chapter_path) = doc.get_current_path() else {
            warn!("epub: skipped chapter {}: no resource path", chapter_idx);
            continue;
        };
        let Some((content, _mime)) = doc.get_current_str() else {
            warn!("epub: skipped chapter {}: unreadable {}", chapter_idx, chapter_path.display());
            continue;
        };

        let chapter_doc = match parse_document(&content) {
            Ok(chapter_doc) => chapter_doc,
            Err(e) => {
                warn!("epub: skipped chapter {}: {}", chapter_idx, e);
                continue;
            }
        };

        let words = extract_words_from_doc(&chapter_doc);
        debug!(
            "epub: chapter index={} path={} start={} words={}",
            chapter_idx,
            chapter_path.display(),
            tokens.len(),
            words.len()
        );
        chapter_starts
            .entry(href_key(&chapter_path))
            .or_insert(tokens.len());
        tokens.extend(words);
    }

    if tokens.is_empty() {
        return Err(LoadError::EpubParse(
            "No extractable text content found in EPUB".to_string(),
        ));
    }

    // Chapters with no words map to the next chapter's first word.
    let last = tokens.len() - 1;
    for start in chapter_starts.values_mut() {
        *start = (*start).min(last);
    }

    let sections = build_sections(&flatten_toc(&doc.toc), &chapter_starts);
    debug!("epub: loaded words={} sections={}", tokens.len(), sections.len());

    Ok(LoadedDocument {
        tokens,
        sections,
        source: format!("epub:{}", path.display()),
    })
}

use super::token::{chapter_start, Section, WordToken};

/// How far back playback may rewind before looking for a sentence start.
pub const REWIND_LOOKBACK_WORDS: usize = 10;

/// Where playback should restart after a pause at `current_index`.
///
/// Backs up `REWIND_LOOKBACK_WORDS` words (never past the start of the
/// containing chapter) and then scans back to the nearest sentence start.
/// If the chapter has none in that range, the chapter start is returned.
pub fn find_rewind_target(current_index: usize, tokens: &[WordToken], sections: &[Section]) -> usize {
    if tokens.is_empty() {
        return current_index;
    }
    let current = current_index.min(tokens.len() - 1);
    let chapter_start = chapter_start(sections, current);
    let search_from = chapter_start.max(current.saturating_sub(REWIND_LOOKBACK_WORDS));

    (chapter_start..=search_from)
        .rev()
        .find(|&i| tokens[i].is_sentence_start)
        .unwrap_or(chapter_start)
}

/// Resume index for play-after-pause.
///
/// A pause during a chapter-break interlude already sits on a stable
/// boundary, so the index is returned unchanged.
pub fn get_resume_index(
    current_index: usize,
    tokens: &[WordToken],
    sections: &[Section],
    is_chapter_break: bool,
) -> usize {
    if is_chapter_break {
        return current_index;
    }
    find_rewind_target(current_index, tokens, sections)
}

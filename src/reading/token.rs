#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closing characters allowed after a sentence terminator ("end.)" or `"Stop!"`).
pub(crate) const CLOSING_CHARS: &[char] = &['"', '\'', '\u{201D}', '\u{2019}', '\u{00BB}', ')', ']', '}'];

/// A single word-like unit produced by the word extractor.
///
/// Tokens are immutable once the extractor returns them. `text` keeps its
/// leading and trailing punctuation ("end.", "well-") so downstream timing and
/// quote matching see exactly what the reader sees.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordToken {
    pub text: String,
    pub is_paragraph_start: bool,
    pub is_sentence_start: bool,
}

impl WordToken {
    pub fn new(text: impl Into<String>, is_paragraph_start: bool, is_sentence_start: bool) -> Self {
        Self {
            text: text.into(),
            is_paragraph_start,
            is_sentence_start,
        }
    }

    /// True when this token closes a sentence.
    pub fn ends_sentence(&self) -> bool {
        ends_sentence(&self.text)
    }
}

/// A chapter (table of contents entry) mapped onto the token sequence.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    pub label: String,
    pub start_index: usize,
}

impl Section {
    pub fn new(label: impl Into<String>, start_index: usize) -> Self {
        Self {
            label: label.into(),
            start_index,
        }
    }
}

/// Strips trailing closing quotes, parens and brackets.
pub(crate) fn strip_closing_chars(text: &str) -> &str {
    text.trim_end_matches(CLOSING_CHARS)
}

/// `.`, `!` or `?` at the end of the word, optionally followed by closers.
pub fn ends_sentence(text: &str) -> bool {
    matches!(strip_closing_chars(text).chars().last(), Some('.' | '!' | '?'))
}

/// Index of the section containing `index`: the entry with the greatest
/// `start_index <= index`. Falls back to the first section.
pub fn containing_section(sections: &[Section], index: usize) -> Option<usize> {
    if sections.is_empty() {
        return None;
    }
    let position = sections.partition_point(|section| section.start_index <= index);
    Some(position.saturating_sub(1))
}

/// Start index of the chapter containing `index`. The first section is treated
/// as starting at 0, and a missing section table means one chapter at 0.
pub fn chapter_start(sections: &[Section], index: usize) -> usize {
    match containing_section(sections, index) {
        Some(0) | None => 0,
        Some(pos) => sections[pos].start_index.min(index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ends_sentence_terminators() {
        assert!(ends_sentence("end."));
        assert!(ends_sentence("what?"));
        assert!(ends_sentence("stop!"));
        assert!(!ends_sentence("well,"));
        assert!(!ends_sentence("word"));
        assert!(!ends_sentence(""));
    }

    #[test]
    fn test_ends_sentence_with_closers() {
        assert!(ends_sentence("end.\""));
        assert!(ends_sentence("end.)"));
        assert!(ends_sentence("said.\u{201D}"));
        assert!(ends_sentence("(really?)]"));
        assert!(!ends_sentence("\"quoted\""));
    }

    #[test]
    fn test_containing_section() {
        let sections = vec![
            Section::new("One", 0),
            Section::new("Two", 10),
            Section::new("Three", 25),
        ];
        assert_eq!(containing_section(&sections, 0), Some(0));
        assert_eq!(containing_section(&sections, 9), Some(0));
        assert_eq!(containing_section(&sections, 10), Some(1));
        assert_eq!(containing_section(&sections, 24), Some(1));
        assert_eq!(containing_section(&sections, 400), Some(2));
        assert_eq!(containing_section(&[], 4), None);
    }

    #[test]
    fn test_chapter_start_treats_first_section_as_zero() {
        let sections = vec![Section::new("Late start", 5), Section::new("Two", 12)];
        assert_eq!(chapter_start(&sections, 2), 0);
        assert_eq!(chapter_start(&sections, 7), 0);
        assert_eq!(chapter_start(&sections, 12), 12);
        assert_eq!(chapter_start(&[], 30), 0);
    }
}

//! ORP (Optimal Recognition Point) splitting.
//!
//! Words are drawn so the focus character stays at a fixed horizontal
//! coordinate. The focus position depends on the length of the word's core
//! (the run of word characters, apostrophes, hyphens, dots and `@`):
//! - 0-1 graphemes → position 0
//! - 2-5 graphemes → position 1
//! - 6-9 graphemes → position 2
//! - 10-13 graphemes → position 3
//! - 14+ graphemes → position 4
//!
//! Punctuation trailing the core never moves the focus: "end." focuses on
//! the same letter as "end".

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrpSplit {
    pub prefix: String,
    pub focus: String,
    pub suffix: String,
}

impl OrpSplit {
    pub fn prefix_len(&self) -> usize {
        self.prefix.graphemes(true).count()
    }

    pub fn suffix_len(&self) -> usize {
        self.suffix.graphemes(true).count()
    }

    /// Grapheme index of the focus within the rebuilt word.
    pub fn focus_position(&self) -> usize {
        self.prefix_len()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_core_char(c: char) -> bool {
    is_word_char(c) || matches!(c, '\'' | '-' | '.' | '@')
}

fn is_core_grapheme(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(is_core_char)
}

fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(is_word_char)
}

/// Focus index for a core of `len` graphemes.
pub fn orp_index(len: usize) -> usize {
    match len {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}

/// Splits `word` into the text before the focus, the focus grapheme, and the
/// text after it.
///
/// Graphemes are classified by their base character, so combining marks stay
/// attached to the letter they decorate.
pub fn split_word(word: &str) -> OrpSplit {
    if word.is_empty() {
        return OrpSplit::default();
    }

    let graphemes: Vec<&str> = word.graphemes(true).collect();
    let (start, core_len) = match graphemes.iter().position(|g| is_core_grapheme(g)) {
        // Nothing word-like at all ("—", "…"): the whole word is the core.
        None => (0, graphemes.len()),
        Some(start) => {
            let rest = &graphemes[start..];
            let run = rest
                .iter()
                .position(|g| !is_core_grapheme(g))
                .unwrap_or(rest.len());
            (start, peel_trailing_punctuation(&rest[..run]))
        }
    };

    let idx = start + orp_index(core_len);
    OrpSplit {
        prefix: graphemes[..idx].concat(),
        focus: graphemes[idx].to_string(),
        suffix: graphemes[idx + 1..].concat(),
    }
}

/// Core length once trailing non-word graphemes are dropped ("end." → "end"),
/// never below one.
fn peel_trailing_punctuation(core: &[&str]) -> usize {
    let mut len = core.len();
    while len > 1 && !is_word_grapheme(core[len - 1]) {
        len -= 1;
    }
    len
}

/// Grapheme index of the focus character within `word`.
pub fn calculate_anchor_position(word: &str) -> usize {
    split_word(word).focus_position()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(word: &str) -> (String, String, String) {
        let split = split_word(word);
        (split.prefix, split.focus, split.suffix)
    }

    #[test]
    fn test_orp_index_bands() {
        assert_eq!(orp_index(0), 0);
        assert_eq!(orp_index(1), 0);
        assert_eq!(orp_index(2), 1);
        assert_eq!(orp_index(5), 1);
        assert_eq!(orp_index(6), 2);
        assert_eq!(orp_index(9), 2);
        assert_eq!(orp_index(10), 3);
        assert_eq!(orp_index(13), 3);
        assert_eq!(orp_index(14), 4);
        assert_eq!(orp_index(28), 4);
    }

    #[test]
    fn test_split_empty_word() {
        assert_eq!(split_word(""), OrpSplit::default());
    }

    #[test]
    fn test_split_single_char() {
        assert_eq!(parts("I"), ("".into(), "I".into(), "".into()));
    }

    #[test]
    fn test_split_short_word() {
        assert_eq!(parts("hello"), ("h".into(), "e".into(), "llo".into()));
    }

    #[test]
    fn test_split_peels_trailing_period() {
        assert_eq!(parts("end."), ("e".into(), "n".into(), "d.".into()));
    }

    #[test]
    fn test_split_trailing_quote_and_comma() {
        assert_eq!(parts("said,\""), ("s".into(), "a".into(), "id,\"".into()));
    }

    #[test]
    fn test_split_hyphen_fragment() {
        // "well-" has a 4 letter core once the hyphen is peeled.
        assert_eq!(parts("well-"), ("w".into(), "e".into(), "ll-".into()));
    }

    #[test]
    fn test_split_keeps_inner_apostrophe() {
        assert_eq!(parts("don't"), ("d".into(), "o".into(), "n't".into()));
    }

    #[test]
    fn test_split_transportation() {
        let split = split_word("transportation");
        assert_eq!(split.prefix, "tran");
        assert_eq!(split.focus, "s");
        assert_eq!(split.suffix, "portation");
    }

    #[test]
    fn test_split_leading_quote_stays_in_prefix() {
        assert_eq!(parts("\"Hello"), ("\"H".into(), "e".into(), "llo".into()));
    }

    #[test]
    fn test_split_dash_token() {
        assert_eq!(parts("\u{2014}"), ("".into(), "\u{2014}".into(), "".into()));
    }

    #[test]
    fn test_split_ellipsis_run() {
        assert_eq!(parts("..."), ("".into(), ".".into(), "..".into()));
    }

    #[test]
    fn test_split_email_core() {
        let split = split_word("me@example.com");
        assert_eq!(split.prefix, "me@e");
        assert_eq!(split.focus, "x");
    }

    #[test]
    fn test_split_multibyte() {
        assert_eq!(parts("café."), ("c".into(), "a".into(), "fé.".into()));
    }

    #[test]
    fn test_split_decomposed_accents_match_composed() {
        assert_eq!(
            parts("re\u{301}sume\u{301}"),
            ("re\u{301}".into(), "s".into(), "ume\u{301}".into())
        );
        assert_eq!(parts("r\u{e9}sum\u{e9}"), ("r\u{e9}".into(), "s".into(), "um\u{e9}".into()));
        assert_eq!(
            calculate_anchor_position("re\u{301}sume\u{301}"),
            calculate_anchor_position("r\u{e9}sum\u{e9}")
        );
    }

    #[test]
    fn test_split_accent_on_focus_stays_attached() {
        assert_eq!(parts("ce\u{301}"), ("c".into(), "e\u{301}".into(), "".into()));
    }

    #[test]
    fn test_calculate_anchor_position() {
        assert_eq!(calculate_anchor_position("I"), 0);
        assert_eq!(calculate_anchor_position("reading"), 2);
        assert_eq!(calculate_anchor_position("extraordinary"), 3);
        assert_eq!(calculate_anchor_position("extraordinarily"), 4);
        assert_eq!(calculate_anchor_position("(hello)"), 2);
        assert_eq!(calculate_anchor_position(""), 0);
    }

    #[test]
    fn test_rebuilt_word_is_lossless() {
        for word in ["end.)", "\u{201C}Quote,\u{201D}", "well-", "3.14", "..."] {
            let split = split_word(word);
            assert_eq!(format!("{}{}{}", split.prefix, split.focus, split.suffix), word);
        }
    }
}

//! Word extraction: structured documents and plain text into `WordToken`s.
//!
//! Text is gathered into an accumulator between block boundaries and split
//! into words when a boundary is reached. Sentence starts are derived in a
//! second pass once every word is known.

use super::document::{Document, Node};
use super::token::WordToken;

/// Elements that start and end a paragraph.
const BLOCK_TAGS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "div", "li", "td", "th", "blockquote", "section",
    "article", "header", "footer",
];

/// Elements whose text is never read aloud or flashed.
const SKIPPED_TAGS: &[&str] = &["script", "style"];

const EM_DASH: char = '\u{2014}';
const EN_DASH: char = '\u{2013}';
const SOFT_HYPHEN: char = '\u{00AD}';

fn is_block(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

/// Raw text buffer plus the pending paragraph flag.
struct WordAccumulator {
    buffer: String,
    mark_next_as_paragraph_start: bool,
    tokens: Vec<WordToken>,
}

impl WordAccumulator {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            mark_next_as_paragraph_start: true,
            tokens: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn break_paragraph(&mut self) {
        self.flush();
        self.mark_next_as_paragraph_start = true;
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let words = segment_words(&self.buffer);
        self.buffer.clear();
        if words.is_empty() {
            return;
        }

        let paragraph_start = self.mark_next_as_paragraph_start;
        self.tokens.extend(
            words
                .into_iter()
                .enumerate()
                .map(|(i, word)| WordToken::new(word, paragraph_start && i == 0, false)),
        );
        self.mark_next_as_paragraph_start = false;
    }

    fn finish(mut self) -> Vec<WordToken> {
        self.flush();
        assign_sentence_starts(&mut self.tokens);
        self.tokens
    }
}

enum Step<'a> {
    Enter(&'a Node),
    Leave,
}

/// Extracts the ordered word tokens of a document's body.
///
/// A document without a body yields no tokens.
pub fn extract_words_from_doc(document: &Document) -> Vec<WordToken> {
    let Some(body) = &document.body else {
        return Vec::new();
    };

    let mut acc = WordAccumulator::new();
    let mut stack: Vec<Step> = body.children.iter().rev().map(Step::Enter).collect();

    while let Some(step) = stack.pop() {
        match step {
            Step::Leave => acc.break_paragraph(),
            Step::Enter(Node::Text(text)) => acc.push_text(text),
            Step::Enter(Node::Element(element)) => {
                let tag = element.tag.as_str();
                if tag == "br" {
                    acc.break_paragraph();
                    continue;
                }
                if SKIPPED_TAGS.contains(&tag) {
                    continue;
                }
                if is_block(tag) {
                    acc.break_paragraph();
                    stack.push(Step::Leave);
                }
                stack.extend(element.children.iter().rev().map(Step::Enter));
            }
        }
    }

    acc.finish()
}

/// Extracts tokens from plain text. Blank lines separate paragraphs; single
/// newlines are ordinary whitespace.
pub fn extract_words_from_text(text: &str) -> Vec<WordToken> {
    let mut acc = WordAccumulator::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            acc.break_paragraph();
        } else {
            acc.push_text(line);
            acc.push_text(" ");
        }
    }
    acc.finish()
}

/// Splits one flushed run of text into words.
///
/// Whitespace collapses to single spaces, soft hyphens are dropped, em/en
/// dashes become stand-alone words, spaced ellipses (". . .") collapse into
/// one dot run, and hyphenated compounds split after the hyphen
/// ("well-known" → "well-", "known").
pub(crate) fn segment_words(raw: &str) -> Vec<String> {
    let normalized = raw
        .split_whitespace()
        .map(|word| word.replace(SOFT_HYPHEN, ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    let chars: Vec<char> = normalized.chars().collect();
    let mut out = String::with_capacity(normalized.len() + 8);

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            EM_DASH | EN_DASH => {
                out.push(' ');
                out.push(c);
                out.push(' ');
                i += 1;
            }
            '.' => {
                let (dots, end) = spaced_dot_run(&chars, i);
                if dots >= 3 {
                    out.push(' ');
                    out.extend(std::iter::repeat('.').take(dots));
                    out.push(' ');
                    i = end;
                } else {
                    out.push('.');
                    i += 1;
                }
            }
            '-' if is_compound_hyphen(&chars, i) => {
                out.push_str("- ");
                i += 1;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out.split_whitespace().map(str::to_string).collect()
}

/// Counts dots separated by single spaces starting at `start`. Returns the
/// number of dots and the index just past the last one.
fn spaced_dot_run(chars: &[char], start: usize) -> (usize, usize) {
    let mut dots = 1;
    let mut end = start + 1;
    while end + 1 < chars.len() && chars[end] == ' ' && chars[end + 1] == '.' {
        dots += 1;
        end += 2;
    }
    (dots, end)
}

fn is_compound_hyphen(chars: &[char], i: usize) -> bool {
    i > 0
        && chars[i - 1].is_alphanumeric()
        && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric())
}

/// A token starts a sentence when it is first, starts a paragraph, or follows
/// a sentence-terminal token.
fn assign_sentence_starts(tokens: &mut [WordToken]) {
    let mut previous_ends_sentence = true;
    for token in tokens.iter_mut() {
        token.is_sentence_start = previous_ends_sentence || token.is_paragraph_start;
        previous_ends_sentence = token.ends_sentence();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::document::Element;

    fn doc(children: Vec<Node>) -> Document {
        Document::new(Element::with_children("body", children))
    }

    fn p(text: &str) -> Node {
        Node::element("p", vec![Node::text(text)])
    }

    fn texts(tokens: &[WordToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_single_paragraph() {
        let tokens = extract_words_from_doc(&doc(vec![p("Hello world.")]));
        assert_eq!(
            tokens,
            vec![
                WordToken::new("Hello", true, true),
                WordToken::new("world.", false, false),
            ]
        );
    }

    #[test]
    fn test_hyphenated_compound_splits_after_hyphen() {
        let tokens = extract_words_from_doc(&doc(vec![p("well-known")]));
        assert_eq!(texts(&tokens), vec!["well-", "known"]);
        assert!(!tokens[1].is_paragraph_start);
        assert!(!tokens[1].is_sentence_start);
    }

    #[test]
    fn test_multi_part_compound() {
        assert_eq!(segment_words("mother-in-law"), vec!["mother-", "in-", "law"]);
    }

    #[test]
    fn test_lone_and_leading_hyphens_are_kept() {
        assert_eq!(segment_words("a - b -5 x--y"), vec!["a", "-", "b", "-5", "x--y"]);
    }

    #[test]
    fn test_em_dash_becomes_own_token() {
        assert_eq!(segment_words("word\u{2014}another"), vec!["word", "\u{2014}", "another"]);
        assert_eq!(segment_words("one \u{2013} two"), vec!["one", "\u{2013}", "two"]);
    }

    #[test]
    fn test_spaced_ellipsis_collapses() {
        assert_eq!(segment_words("Wait. . . what"), vec!["Wait", "...", "what"]);
        assert_eq!(segment_words("so . . . . done"), vec!["so", "....", "done"]);
    }

    #[test]
    fn test_unspaced_ellipsis_untouched() {
        assert_eq!(segment_words("Wait... what"), vec!["Wait...", "what"]);
        assert_eq!(segment_words("a. b. c"), vec!["a.", "b.", "c"]);
    }

    #[test]
    fn test_whitespace_normalization() {
        assert_eq!(segment_words("  a\n\t b\u{00A0}c  "), vec!["a", "b", "c"]);
        assert!(segment_words(" \n ").is_empty());
    }

    #[test]
    fn test_soft_hyphens_are_dropped() {
        assert_eq!(segment_words("extra\u{00AD}ordinary"), vec!["extraordinary"]);
        assert_eq!(segment_words("a \u{00AD} b"), vec!["a", "b"]);
        assert_eq!(segment_words("hy\u{00AD}phen-ated"), vec!["hyphen-", "ated"]);
    }

    #[test]
    fn test_ellipsis_ends_sentence() {
        let tokens = extract_words_from_doc(&doc(vec![p("Wait. . . what")]));
        assert_eq!(texts(&tokens), vec!["Wait", "...", "what"]);
        assert!(tokens[2].is_sentence_start);
    }

    #[test]
    fn test_sentence_starts_after_terminators() {
        let tokens = extract_words_from_doc(&doc(vec![p("One. Two! \"Three?\" four five")]));
        let starts: Vec<bool> = tokens.iter().map(|t| t.is_sentence_start).collect();
        assert_eq!(starts, vec![true, true, true, true, false]);
        assert!(tokens.iter().skip(1).all(|t| !t.is_paragraph_start));
    }

    #[test]
    fn test_paragraphs_across_blocks() {
        let tokens = extract_words_from_doc(&doc(vec![
            Node::element("h1", vec![Node::text("Chapter One")]),
            p("It began"),
            p("and ended"),
        ]));
        let paragraph_starts: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_paragraph_start)
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(paragraph_starts, vec!["Chapter", "It", "and"]);
        assert!(tokens.iter().all(|t| !t.is_paragraph_start || t.is_sentence_start));
    }

    #[test]
    fn test_inline_elements_do_not_break() {
        let tokens = extract_words_from_doc(&doc(vec![Node::element(
            "p",
            vec![
                Node::text("He said "),
                Node::element("em", vec![Node::text("hi")]),
                Node::text(" there."),
            ],
        )]));
        assert_eq!(texts(&tokens), vec!["He", "said", "hi", "there."]);
        assert_eq!(tokens.iter().filter(|t| t.is_paragraph_start).count(), 1);
    }

    #[test]
    fn test_inline_boundary_without_space_joins() {
        let tokens = extract_words_from_doc(&doc(vec![Node::element(
            "p",
            vec![Node::element("b", vec![Node::text("sun")]), Node::text("light")],
        )]));
        assert_eq!(texts(&tokens), vec!["sunlight"]);
    }

    #[test]
    fn test_line_break_starts_paragraph() {
        let tokens = extract_words_from_doc(&doc(vec![Node::element(
            "p",
            vec![Node::text("Roses are red"), Node::element("br", vec![]), Node::text("violets")],
        )]));
        assert_eq!(texts(&tokens), vec!["Roses", "are", "red", "violets"]);
        assert!(tokens[3].is_paragraph_start);
        assert!(tokens[3].is_sentence_start);
    }

    #[test]
    fn test_text_trailing_a_nested_block() {
        let tokens = extract_words_from_doc(&doc(vec![Node::element(
            "div",
            vec![p("Inner"), Node::text("tail text")],
        )]));
        assert_eq!(texts(&tokens), vec!["Inner", "tail", "text"]);
        assert!(tokens[1].is_paragraph_start);
        assert!(!tokens[2].is_paragraph_start);
    }

    #[test]
    fn test_empty_blocks_keep_pending_flag() {
        let tokens = extract_words_from_doc(&doc(vec![
            p("   "),
            Node::element("div", vec![]),
            p("Only"),
        ]));
        assert_eq!(tokens, vec![WordToken::new("Only", true, true)]);
    }

    #[test]
    fn test_loose_body_text_is_first_paragraph() {
        let tokens = extract_words_from_doc(&doc(vec![Node::text("loose words"), p("Next")]));
        assert!(tokens[0].is_paragraph_start);
        assert!(tokens[2].is_paragraph_start);
    }

    #[test]
    fn test_script_and_style_are_skipped() {
        let tokens = extract_words_from_doc(&doc(vec![
            Node::element("style", vec![Node::text("p { color: red; }")]),
            p("Visible"),
            Node::element("script", vec![Node::text("var x = 1;")]),
        ]));
        assert_eq!(texts(&tokens), vec!["Visible"]);
    }

    #[test]
    fn test_document_without_body() {
        assert!(extract_words_from_doc(&Document::empty()).is_empty());
    }

    #[test]
    fn test_deeply_nested_document() {
        let mut node = Node::text("deep");
        for _ in 0..2_000 {
            node = Node::element("span", vec![node]);
        }
        let tokens = extract_words_from_doc(&doc(vec![node]));
        assert_eq!(texts(&tokens), vec!["deep"]);
    }

    #[test]
    fn test_text_paragraphs_split_on_blank_lines() {
        let tokens = extract_words_from_text("First line\ncontinues here.\n\n  \nSecond para");
        assert_eq!(
            texts(&tokens),
            vec!["First", "line", "continues", "here.", "Second", "para"]
        );
        let paragraph_starts: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_paragraph_start)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(paragraph_starts, vec![0, 4]);
    }

    #[test]
    fn test_text_lines_join_with_space() {
        let tokens = extract_words_from_text("end of\nline");
        assert_eq!(texts(&tokens), vec!["end", "of", "line"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_words_from_text("").is_empty());
        assert!(extract_words_from_text("\n\n \n").is_empty());
    }
}

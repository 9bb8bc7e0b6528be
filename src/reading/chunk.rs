//! Groups a token sequence into runs sized for speech synthesis or model
//! context windows.
//!
//! Every producer here returns chunks that cover the input contiguously:
//! `start_index` values increase, there are no gaps, and the `word_count`
//! values sum to the number of input tokens.

use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::extract::extract_words_from_text;
use super::token::WordToken;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chunk {
    pub text: String,
    pub start_index: usize,
    pub word_count: usize,
}

impl Chunk {
    fn from_range(tokens: &[WordToken], range: Range<usize>) -> Self {
        let text = tokens[range.clone()]
            .iter()
            .map(|token| token.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Chunk {
            text,
            start_index: range.start,
            word_count: range.len(),
        }
    }
}

/// Length in chars of the tokens in `range` joined by single spaces.
fn joined_len(tokens: &[WordToken], range: Range<usize>) -> usize {
    let words = range.len();
    let chars: usize = tokens[range]
        .iter()
        .map(|token| token.text.chars().count())
        .sum();
    chars + words.saturating_sub(1)
}

/// Closes a chunk at each paragraph start once the running chunk holds at
/// least `min_words` tokens. Paragraphs are never split.
pub fn chunk_words_by_paragraph(tokens: &[WordToken], min_words: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if i > start && token.is_paragraph_start && i - start >= min_words {
            chunks.push(Chunk::from_range(tokens, start..i));
            start = i;
        }
    }
    if start < tokens.len() {
        chunks.push(Chunk::from_range(tokens, start..tokens.len()));
    }
    chunks
}

/// Splits so each chunk stays within `max_chars` where the text allows it.
///
/// When the next token would overflow, the running chunk is cut after its
/// last sentence end and the rest carries over. Without a sentence end the
/// cut falls right before the overflowing token. A single token longer than
/// `max_chars` becomes a chunk of its own.
pub fn chunk_words_by_char_limit(tokens: &[WordToken], max_chars: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut len = 0;

    for (i, token) in tokens.iter().enumerate() {
        let word_len = token.text.chars().count();
        let separator = usize::from(i > start);

        if i > start && len + separator + word_len > max_chars {
            let cut = tokens[start..i]
                .iter()
                .rposition(|token| token.ends_sentence())
                .map(|pos| start + pos + 1)
                .unwrap_or(i);
            chunks.push(Chunk::from_range(tokens, start..cut));
            start = cut;
            len = joined_len(tokens, start..i);
        }

        len += usize::from(i > start) + word_len;
    }
    if start < tokens.len() {
        chunks.push(Chunk::from_range(tokens, start..tokens.len()));
    }
    chunks
}

/// Plain-text form of [`chunk_words_by_paragraph`].
pub fn chunk_text_by_paragraph(text: &str, min_words: usize) -> Vec<Chunk> {
    chunk_words_by_paragraph(&extract_words_from_text(text), min_words)
}

/// Plain-text form of [`chunk_words_by_char_limit`].
pub fn chunk_text_by_char_limit(text: &str, max_chars: usize) -> Vec<Chunk> {
    chunk_words_by_char_limit(&extract_words_from_text(text), max_chars)
}

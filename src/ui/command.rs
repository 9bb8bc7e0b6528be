//! Input parsing for the terminal reader
//!
//! - Key presses map onto `AppEvent`s for the playback controller.
//! - `--chunks` values (`paragraph:N`, `chars:N`) parse into a `ChunkMode`.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rsvp_engine::app::AppEvent;
use rsvp_engine::reading::{
    chunk_words_by_char_limit, chunk_words_by_paragraph, Chunk, NavigationTarget, WordToken,
};

/// WPM change per `+`/`-` press.
pub const WPM_STEP: i32 = 25;

/// Maps a key press onto a controller request.
///
/// | key      | action                 |
/// |----------|------------------------|
/// | space    | play/pause             |
/// | ← / →    | previous/next sentence |
/// | ↑ / ↓    | previous/next paragraph|
/// | c        | chapter start          |
/// | b        | book start             |
/// | + / -    | wpm ±25                |
/// | q / Esc  | quit                   |
pub fn key_to_app_event(key: KeyEvent) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Quit;
    }
    match key.code {
        KeyCode::Char(' ') => AppEvent::TogglePlay,
        KeyCode::Left => AppEvent::Navigate(NavigationTarget::PrevSentence),
        KeyCode::Right => AppEvent::Navigate(NavigationTarget::NextSentence),
        KeyCode::Up => AppEvent::Navigate(NavigationTarget::PrevParagraph),
        KeyCode::Down => AppEvent::Navigate(NavigationTarget::NextParagraph),
        KeyCode::Char('c') => AppEvent::Navigate(NavigationTarget::Chapter),
        KeyCode::Char('b') => AppEvent::Navigate(NavigationTarget::Book),
        KeyCode::Char('+') | KeyCode::Char('=') => AppEvent::AdjustWpm(WPM_STEP),
        KeyCode::Char('-') | KeyCode::Char('_') => AppEvent::AdjustWpm(-WPM_STEP),
        KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
        _ => AppEvent::None,
    }
}

/// How `--chunks` groups the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkMode {
    /// Close chunks on paragraph starts once they hold this many words.
    Paragraph(usize),
    /// Keep chunks within this many characters, cutting at sentence ends.
    Chars(usize),
}

impl ChunkMode {
    pub fn apply(self, tokens: &[WordToken]) -> Vec<Chunk> {
        match self {
            ChunkMode::Paragraph(min_words) => chunk_words_by_paragraph(tokens, min_words),
            ChunkMode::Chars(max_chars) => chunk_words_by_char_limit(tokens, max_chars),
        }
    }
}

impl fmt::Display for ChunkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkMode::Paragraph(n) => write!(f, "paragraph:{}", n),
            ChunkMode::Chars(n) => write!(f, "chars:{}", n),
        }
    }
}

impl FromStr for ChunkMode {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let Some((kind, size)) = input.split_once(':') else {
            return Err(format!("expected paragraph:N or chars:N, got {:?}", input));
        };
        let size: usize = size
            .trim()
            .parse()
            .map_err(|_| format!("invalid chunk size {:?}", size))?;
        match kind.trim() {
            "paragraph" | "p" => Ok(ChunkMode::Paragraph(size)),
            "chars" | "c" => Ok(ChunkMode::Chars(size)),
            other => Err(format!("unknown chunk mode {:?}", other)),
        }
    }
}

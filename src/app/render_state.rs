use unicode_width::UnicodeWidthStr;

use crate::app::mode::AppMode;
use crate::reading::timing::vanity_wpm;
use crate::reading::{split_word, OrpSplit, ReadingState};

/// Render state for UI components
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub current_word: Option<String>,
    pub split: OrpSplit,
    pub preview: Vec<String>,
    pub current_index: usize,
    /// (current position, total words)
    pub progress: (usize, usize),
    pub section_label: Option<String>,
    /// WPM as shown to the reader, vanity ratio applied.
    pub display_wpm: u32,
}

impl RenderState {
    /// Create an empty render state for when no document is loaded
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            current_word: None,
            split: OrpSplit::default(),
            preview: vec![],
            current_index: 0,
            progress: (0, 0),
            section_label: None,
            display_wpm: 0,
        }
    }

    /// Snapshot of `state` as it should appear at `wpm`.
    pub fn from_reading_state(mode: AppMode, state: &ReadingState, wpm: u32) -> Self {
        let Some(token) = state.current_token() else {
            return Self {
                display_wpm: vanity_wpm(wpm, state.settings()),
                ..Self::empty(mode)
            };
        };

        Self {
            mode,
            current_word: Some(token.text.clone()),
            split: split_word(&token.text),
            preview: state.preview_words().iter().map(|t| t.text.clone()).collect(),
            current_index: state.current_index(),
            progress: (state.current_index() + 1, state.len()),
            section_label: state.current_section().map(|s| s.label.clone()),
            display_wpm: vanity_wpm(wpm, state.settings()),
        }
    }

    /// Terminal columns taken by the text left of the focus character.
    pub fn focus_offset(&self) -> usize {
        self.split.prefix.width()
    }

    pub fn progress_ratio(&self) -> f64 {
        let (current, total) = self.progress;
        if total == 0 {
            0.0
        } else {
            current as f64 / total as f64
        }
    }
}

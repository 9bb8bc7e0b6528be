use std::time::Duration;

use crate::engine::config::{clamp_wpm, RsvpSettings};

use super::navigation::{calculate_navigation_target, NavigationTarget};
use super::quote::find_quote_index;
use super::resume::get_resume_index;
use super::timing::{calculate_rsvp_interval, interval_duration};
use super::token::{containing_section, Section, WordToken};

/// A reading session over one immutable token sequence.
///
/// The state owns the only mutable position. Every index it hands out is
/// within `[0, len - 1]` (or 0 for an empty book).
pub struct ReadingState {
    tokens: Vec<WordToken>,
    sections: Vec<Section>,
    current_index: usize,
    furthest_index: usize,
    wpm: u32,
    settings: RsvpSettings,
}

impl ReadingState {
    pub fn new(tokens: Vec<WordToken>, sections: Vec<Section>, wpm: u32, settings: RsvpSettings) -> Self {
        Self {
            tokens,
            sections,
            current_index: 0,
            furthest_index: 0,
            wpm: clamp_wpm(wpm),
            settings,
        }
    }

    pub fn new_with_default_settings(tokens: Vec<WordToken>, wpm: u32) -> Self {
        Self::new(tokens, Vec::new(), wpm, RsvpSettings::default())
    }

    pub fn tokens(&self) -> &[WordToken] {
        &self.tokens
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn settings(&self) -> &RsvpSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Highest index reached so far in this session.
    pub fn furthest_index(&self) -> usize {
        self.furthest_index
    }

    pub fn wpm(&self) -> u32 {
        self.wpm
    }

    pub fn current_token(&self) -> Option<&WordToken> {
        self.tokens.get(self.current_index)
    }

    /// Display time of the current word at the session WPM, in whole ms.
    pub fn current_token_duration(&self) -> u64 {
        match self.current_token() {
            Some(token) => calculate_rsvp_interval(&token.text, self.wpm, &self.settings).round() as u64,
            None => 0,
        }
    }

    /// Display time of the current word at an explicit WPM (used while ramping).
    pub fn current_interval_at(&self, wpm: u32) -> Duration {
        match self.current_token() {
            Some(token) => interval_duration(&token.text, wpm, &self.settings),
            None => Duration::ZERO,
        }
    }

    pub fn adjust_wpm(&mut self, delta: i32) {
        let new_wpm = (self.wpm as i64 + delta as i64).max(0);
        self.wpm = clamp_wpm(new_wpm.min(u32::MAX as i64) as u32);
    }

    fn move_to(&mut self, index: usize) -> usize {
        self.current_index = index.min(self.tokens.len().saturating_sub(1));
        self.furthest_index = self.furthest_index.max(self.current_index);
        self.current_index
    }

    /// Moves to a navigation target and returns the new index.
    pub fn navigate(&mut self, target: NavigationTarget) -> usize {
        let index = calculate_navigation_target(self.current_index, &self.tokens, &self.sections, target);
        self.move_to(index)
    }

    /// Jumps to `index`, clamped into the token range.
    pub fn seek(&mut self, index: usize) -> usize {
        self.move_to(index)
    }

    /// Steps one word forward. Returns false when already on the last word.
    pub fn advance(&mut self) -> bool {
        if self.current_index + 1 < self.tokens.len() {
            self.move_to(self.current_index + 1);
            true
        } else {
            false
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.current_index + 1 >= self.tokens.len()
    }

    /// Where playback should restart; see [`get_resume_index`].
    pub fn resume_index(&self, is_chapter_break: bool) -> usize {
        get_resume_index(self.current_index, &self.tokens, &self.sections, is_chapter_break)
    }

    pub fn current_section(&self) -> Option<&Section> {
        containing_section(&self.sections, self.current_index).map(|i| &self.sections[i])
    }

    /// The section whose first word is exactly `index`, if any.
    pub fn section_starting_at(&self, index: usize) -> Option<&Section> {
        self.sections.iter().rev().find(|section| section.start_index == index)
    }

    /// Fraction of the book read, where the last word counts as 1.0.
    pub fn progress(&self) -> f64 {
        if self.tokens.is_empty() {
            0.0
        } else {
            (self.current_index + 1) as f64 / self.tokens.len() as f64
        }
    }

    /// The next `preview_word_count` words after the current one.
    pub fn preview_words(&self) -> &[WordToken] {
        let start = (self.current_index + 1).min(self.tokens.len());
        let end = (start + self.settings.preview_word_count).min(self.tokens.len());
        &self.tokens[start..end]
    }

    pub fn find_quote(&self, quote: &str) -> Option<usize> {
        find_quote_index(&self.tokens, quote)
    }
}

use std::time::Duration;

use crate::engine::config::RsvpSettings;

use super::ovp::split_word;
use super::token::strip_closing_chars;

/// Widest density of the benchmark word "transportation". The renderer scales
/// fonts against the same figure, so it must not drift.
pub const BENCH_MAX_DENSITY: f64 = 15.83;

/// Words wider than the benchmark by more than this factor count as too wide.
const TOO_WIDE_TOLERANCE: f64 = 1.15;

/// Raw length above which a word gets the long-word multiplier.
const LONG_WORD_THRESHOLD: usize = 8;

/// Digit run length above which a word gets the long-word multiplier.
const LONG_DIGIT_RUN: usize = 2;

/// Fraction of the target WPM at the start of a ramp.
const RAMP_START_RATIO: f64 = 0.7;

/// Base delay per word in milliseconds, rounded.
pub fn wpm_to_milliseconds(wpm: u32) -> u64 {
    (60_000.0 / wpm.max(1) as f64).round() as u64
}

fn is_dash_word(word: &str) -> bool {
    word == "\u{2014}" || word == "\u{2013}"
}

fn punctuation_multiplier(word: &str, settings: &RsvpSettings) -> f64 {
    if is_dash_word(word) {
        return settings.period_multiplier;
    }
    match strip_closing_chars(word).chars().last() {
        Some('.' | '!' | '?') => settings.period_multiplier,
        Some(',' | ';' | ':') => settings.comma_multiplier,
        _ => 1.0,
    }
}

/// Left and right optical density around the ORP focus.
pub fn optical_density(word: &str) -> (f64, f64) {
    let split = split_word(word);
    let left = (split.prefix_len() as f64 + 0.5) / 0.4;
    let right = (split.suffix_len() as f64 + 0.5) / 0.6;
    (left, right)
}

fn longest_digit_run(word: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in word.chars() {
        if c.is_ascii_digit() {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

fn length_multiplier(word: &str, settings: &RsvpSettings) -> f64 {
    let (left, right) = optical_density(word);
    if left.max(right) > BENCH_MAX_DENSITY * TOO_WIDE_TOLERANCE {
        settings.too_wide_multiplier
    } else if word.chars().count() > LONG_WORD_THRESHOLD || longest_digit_run(word) > LONG_DIGIT_RUN {
        settings.long_word_multiplier
    } else {
        1.0
    }
}

/// Display duration of `word` in milliseconds.
///
/// `60000 / wpm`, scaled by the punctuation multiplier and then by the
/// too-wide or long-word multiplier. A wpm of 0 is treated as 1.
pub fn calculate_rsvp_interval(word: &str, wpm: u32, settings: &RsvpSettings) -> f64 {
    let base = 60_000.0 / wpm.max(1) as f64;
    let mut multiplier = punctuation_multiplier(word, settings);
    multiplier *= length_multiplier(word, settings);
    base * multiplier
}

/// `calculate_rsvp_interval` rounded to whole milliseconds.
pub fn interval_duration(word: &str, wpm: u32, settings: &RsvpSettings) -> Duration {
    Duration::from_millis(calculate_rsvp_interval(word, wpm, settings).round() as u64)
}

/// Effective WPM `elapsed_ms` after playback started: 70% of the target,
/// rising linearly to the full target over the ramp duration.
pub fn ramped_wpm(target_wpm: u32, elapsed_ms: u64, settings: &RsvpSettings) -> u32 {
    let ramp = settings.wpm_ramp_duration_ms;
    if ramp == 0 || elapsed_ms >= ramp {
        return target_wpm;
    }
    let progress = elapsed_ms as f64 / ramp as f64;
    let ratio = RAMP_START_RATIO + (1.0 - RAMP_START_RATIO) * progress;
    ((target_wpm as f64 * ratio).round() as u32).max(1)
}

/// Display-only WPM figure.
pub fn vanity_wpm(wpm: u32, settings: &RsvpSettings) -> u32 {
    (wpm as f64 * settings.vanity_wpm_ratio).round() as u32
}

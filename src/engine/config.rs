// RSVP pacing configuration.
// Settings are passed explicitly to every timing function; nothing here is global.

use std::ops::RangeInclusive;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default reading speed in words per minute
pub const DEFAULT_WPM: u32 = 300;

/// Minimum and maximum allowed WPM
pub const WPM_RANGE: RangeInclusive<u32> = 50..=1000;

pub const PERIOD_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=5.0;
pub const COMMA_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=3.0;
pub const LONG_WORD_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=3.0;
pub const TOO_WIDE_MULTIPLIER_RANGE: RangeInclusive<f64> = 1.0..=3.0;
pub const CHAPTER_BREAK_DELAY_RANGE: RangeInclusive<u64> = 0..=10_000;
pub const ORIENTATION_DELAY_RANGE: RangeInclusive<u64> = 0..=3_000;
pub const WPM_RAMP_DURATION_RANGE: RangeInclusive<u64> = 0..=30_000;
pub const VANITY_WPM_RATIO_RANGE: RangeInclusive<f64> = 1.0..=2.0;
pub const PREVIEW_WORD_COUNT_RANGE: RangeInclusive<usize> = 0..=10;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Pacing knobs consumed read-only by the interval calculator and the
/// playback controller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RsvpSettings {
    /// Sentence end or stand-alone dash (default 3.0x)
    pub period_multiplier: f64,

    /// Clause punctuation `,` `;` `:` (default 1.5x)
    pub comma_multiplier: f64,

    /// Words longer than 8 characters or holding 3+ digit runs (default 1.15x)
    pub long_word_multiplier: f64,

    /// Words optically wider than "transportation" by more than 15% (default 1.4x)
    pub too_wide_multiplier: f64,

    /// Interlude shown when playback crosses into a new chapter
    pub chapter_break_delay_ms: u64,

    /// Extra time on the first word after play
    pub orientation_delay_ms: u64,

    /// Time to ramp from 70% to 100% of the target WPM; 0 disables the ramp
    pub wpm_ramp_duration_ms: u64,

    /// Display-only WPM inflation
    pub vanity_wpm_ratio: f64,

    /// Upcoming words exposed to the presentation layer
    pub preview_word_count: usize,
}

impl Default for RsvpSettings {
    fn default() -> Self {
        Self {
            period_multiplier: 3.0,
            comma_multiplier: 1.5,
            long_word_multiplier: 1.15,
            too_wide_multiplier: 1.4,
            chapter_break_delay_ms: 2_000,
            orientation_delay_ms: 400,
            wpm_ramp_duration_ms: 5_000,
            vanity_wpm_ratio: 1.0,
            preview_word_count: 3,
        }
    }
}

fn check<T>(field: &'static str, value: T, range: &RangeInclusive<T>) -> Result<(), SettingsError>
where
    T: PartialOrd + Copy + AsF64,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(SettingsError::OutOfRange {
            field,
            value: value.as_f64(),
            min: (*range.start()).as_f64(),
            max: (*range.end()).as_f64(),
        })
    }
}

/// Lossy widening used only for error reporting.
trait AsF64 {
    fn as_f64(self) -> f64;
}

impl AsF64 for f64 {
    fn as_f64(self) -> f64 {
        self
    }
}

impl AsF64 for u64 {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl AsF64 for usize {
    fn as_f64(self) -> f64 {
        self as f64
    }
}

fn clamp_f64(value: f64, range: &RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        *range.start()
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

impl RsvpSettings {
    /// Reports the first field outside its documented range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check("period_multiplier", self.period_multiplier, &PERIOD_MULTIPLIER_RANGE)?;
        check("comma_multiplier", self.comma_multiplier, &COMMA_MULTIPLIER_RANGE)?;
        check("long_word_multiplier", self.long_word_multiplier, &LONG_WORD_MULTIPLIER_RANGE)?;
        check("too_wide_multiplier", self.too_wide_multiplier, &TOO_WIDE_MULTIPLIER_RANGE)?;
        check("chapter_break_delay_ms", self.chapter_break_delay_ms, &CHAPTER_BREAK_DELAY_RANGE)?;
        check("orientation_delay_ms", self.orientation_delay_ms, &ORIENTATION_DELAY_RANGE)?;
        check("wpm_ramp_duration_ms", self.wpm_ramp_duration_ms, &WPM_RAMP_DURATION_RANGE)?;
        check("vanity_wpm_ratio", self.vanity_wpm_ratio, &VANITY_WPM_RATIO_RANGE)?;
        check("preview_word_count", self.preview_word_count, &PREVIEW_WORD_COUNT_RANGE)?;
        Ok(())
    }

    /// Copy with every field forced into its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            period_multiplier: clamp_f64(self.period_multiplier, &PERIOD_MULTIPLIER_RANGE),
            comma_multiplier: clamp_f64(self.comma_multiplier, &COMMA_MULTIPLIER_RANGE),
            long_word_multiplier: clamp_f64(self.long_word_multiplier, &LONG_WORD_MULTIPLIER_RANGE),
            too_wide_multiplier: clamp_f64(self.too_wide_multiplier, &TOO_WIDE_MULTIPLIER_RANGE),
            chapter_break_delay_ms: self
                .chapter_break_delay_ms
                .clamp(*CHAPTER_BREAK_DELAY_RANGE.start(), *CHAPTER_BREAK_DELAY_RANGE.end()),
            orientation_delay_ms: self
                .orientation_delay_ms
                .clamp(*ORIENTATION_DELAY_RANGE.start(), *ORIENTATION_DELAY_RANGE.end()),
            wpm_ramp_duration_ms: self
                .wpm_ramp_duration_ms
                .clamp(*WPM_RAMP_DURATION_RANGE.start(), *WPM_RAMP_DURATION_RANGE.end()),
            vanity_wpm_ratio: clamp_f64(self.vanity_wpm_ratio, &VANITY_WPM_RATIO_RANGE),
            preview_word_count: self
                .preview_word_count
                .clamp(*PREVIEW_WORD_COUNT_RANGE.start(), *PREVIEW_WORD_COUNT_RANGE.end()),
        }
    }
}

/// Clamps a WPM value into `WPM_RANGE`.
pub fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(*WPM_RANGE.start(), *WPM_RANGE.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(RsvpSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_bad_field() {
        let settings = RsvpSettings {
            comma_multiplier: 0.5,
            preview_word_count: 40,
            ..RsvpSettings::default()
        };
        match settings.validate() {
            Err(SettingsError::OutOfRange { field, value, .. }) => {
                assert_eq!(field, "comma_multiplier");
                assert_eq!(value, 0.5);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_nan() {
        let settings = RsvpSettings {
            period_multiplier: f64::NAN,
            ..RsvpSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_integer_ranges() {
        let settings = RsvpSettings {
            chapter_break_delay_ms: 60_000,
            ..RsvpSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert_eq!(err.to_string(), "chapter_break_delay_ms = 60000 is outside 0..=10000");
    }

    #[test]
    fn test_clamped_forces_ranges() {
        let settings = RsvpSettings {
            period_multiplier: 9.0,
            too_wide_multiplier: f64::NAN,
            orientation_delay_ms: 50_000,
            vanity_wpm_ratio: 0.2,
            preview_word_count: 99,
            ..RsvpSettings::default()
        }
        .clamped();
        assert_eq!(settings.period_multiplier, 5.0);
        assert_eq!(settings.too_wide_multiplier, 1.0);
        assert_eq!(settings.orientation_delay_ms, 3_000);
        assert_eq!(settings.vanity_wpm_ratio, 1.0);
        assert_eq!(settings.preview_word_count, 10);
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn test_clamp_wpm() {
        assert_eq!(clamp_wpm(10), 50);
        assert_eq!(clamp_wpm(300), 300);
        assert_eq!(clamp_wpm(5_000), 1000);
    }
}

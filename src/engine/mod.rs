pub mod config;

pub use config::{clamp_wpm, RsvpSettings, SettingsError, DEFAULT_WPM, WPM_RANGE};

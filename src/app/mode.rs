#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Words are advancing on the timer.
    Reading,
    Paused,
    /// Interlude shown on entering a new chapter; the timer is still armed.
    ChapterBreak,
    /// The last word has been shown.
    Finished,
    Quit,
}

impl AppMode {
    /// True while a wake-up may be pending.
    pub fn is_playing(self) -> bool {
        matches!(self, AppMode::Reading | AppMode::ChapterBreak)
    }

    pub fn label(self) -> &'static str {
        match self {
            AppMode::Reading => "reading",
            AppMode::Paused => "paused",
            AppMode::ChapterBreak => "chapter",
            AppMode::Finished => "finished",
            AppMode::Quit => "quit",
        }
    }
}

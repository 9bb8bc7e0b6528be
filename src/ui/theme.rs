use ratatui::style::Color;

/// Midnight palette
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// The ORP focus character.
    pub anchor: Color,
    /// Preview words, progress track, status line.
    pub dimmed: Color,
    /// Chapter-break interlude title.
    pub heading: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26
            text: Color::Rgb(169, 177, 214),    // #A9B1D6
            anchor: Color::Rgb(247, 118, 142),  // #F7768E
            dimmed: Color::Rgb(100, 110, 150),  // #646E96
            heading: Color::Rgb(224, 175, 104), // #E0AF68
        }
    }
}

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use rsvp_engine::app::{AppMode, RenderState};

use crate::ui::theme::Theme;

/// Width of the progress track in cells.
const PROGRESS_WIDTH: usize = 40;

/// The current word with its focus character drawn at `focus_column`.
///
/// The word is padded on the left so the focus never moves between words;
/// words whose prefix is wider than the column start flush left.
pub fn render_word_display(render: &RenderState, focus_column: usize, theme: &Theme) -> Paragraph<'static> {
    let padding = focus_column.saturating_sub(render.focus_offset());
    let text_style = Style::default().fg(theme.text);

    let line = Line::from(vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(render.split.prefix.clone(), text_style),
        Span::styled(
            render.split.focus.clone(),
            Style::default().fg(theme.anchor).add_modifier(Modifier::BOLD),
        ),
        Span::styled(render.split.suffix.clone(), text_style),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Left)
        .style(Style::default().bg(theme.background))
}

/// Marker line above and below the word pointing at the focus column.
pub fn render_focus_marker(focus_column: usize, theme: &Theme) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::raw(" ".repeat(focus_column)),
        Span::styled("│", Style::default().fg(theme.dimmed)),
    ]);
    Paragraph::new(line).style(Style::default().bg(theme.background))
}

/// Upcoming words, dimmed, starting under the focus column.
pub fn render_preview(render: &RenderState, focus_column: usize, theme: &Theme) -> Paragraph<'static> {
    let text = format!("{}{}", " ".repeat(focus_column), render.preview.join(" "));
    Paragraph::new(text)
        .alignment(Alignment::Left)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

/// Title card shown during a chapter-break interlude.
pub fn render_chapter_break(render: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let label = render.section_label.clone().unwrap_or_default();
    Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(theme.heading).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(theme.background))
}

pub fn render_progress_bar(progress: (usize, usize), theme: &Theme) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current * PROGRESS_WIDTH / total).min(PROGRESS_WIDTH)
    };
    let empty_len = PROGRESS_WIDTH - filled_len;

    Line::from(vec![
        Span::styled("─".repeat(filled_len), Style::default().fg(theme.text)),
        Span::styled("─".repeat(empty_len), Style::default().fg(theme.dimmed)),
    ])
    .alignment(Alignment::Center)
}

pub fn status_text(render: &RenderState) -> String {
    let mut parts = vec![
        render.mode.label().to_uppercase(),
        format!("{} wpm", render.display_wpm),
    ];
    if let Some(label) = &render.section_label {
        parts.push(label.clone());
    }
    parts.push(format!("{:.0}%", render.progress_ratio() * 100.0));
    if render.mode == AppMode::Paused {
        parts.push("space to play, q to quit".to_string());
    }
    parts.join("  ·  ")
}

pub fn render_status_line(render: &RenderState, theme: &Theme) -> Paragraph<'static> {
    Paragraph::new(status_text(render))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.dimmed).bg(theme.background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsvp_engine::reading::{ReadingState, Section, WordToken};

    fn render_state(mode: AppMode) -> RenderState {
        let tokens = vec![
            WordToken::new("Hello", true, true),
            WordToken::new("there", false, false),
        ];
        let state = ReadingState::new(
            tokens,
            vec![Section::new("Prologue", 0)],
            300,
            Default::default(),
        );
        RenderState::from_reading_state(mode, &state, 300)
    }

    #[test]
    fn test_render_word_display_creates_paragraph() {
        let theme = Theme::default();
        let _ = render_word_display(&render_state(AppMode::Reading), 10, &theme);
        // Focus column narrower than the prefix must not underflow.
        let _ = render_word_display(&render_state(AppMode::Reading), 0, &theme);
    }

    #[test]
    fn test_render_progress_bar_zero_total() {
        let _ = render_progress_bar((0, 0), &Theme::default());
    }

    #[test]
    fn test_render_progress_bar_overflow_is_clamped() {
        let _ = render_progress_bar((150, 100), &Theme::default());
    }

    #[test]
    fn test_status_text() {
        let status = status_text(&render_state(AppMode::Reading));
        assert_eq!(status, "READING  ·  300 wpm  ·  Prologue  ·  50%");

        let paused = status_text(&render_state(AppMode::Paused));
        assert!(paused.starts_with("PAUSED"));
        assert!(paused.ends_with("space to play, q to quit"));
    }
}

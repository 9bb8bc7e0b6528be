use crate::ui::command::key_to_app_event;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;
use crate::ui::view::{
    render_chapter_break, render_focus_marker, render_preview, render_progress_bar,
    render_status_line, render_word_display,
};
use crossterm::event::{self, Event, KeyEventKind};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use rsvp_engine::app::{AppMode, PlaybackController, RenderState};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Longest time the loop blocks on input while no wake-up is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Share of the frame width left of the focus character.
const FOCUS_COLUMN_RATIO: f64 = 0.4;

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            theme: Theme::default(),
            _guard: guard,
        })
    }

    /// Drives `controller` until the reader quits.
    ///
    /// Each pass first delivers an overdue wake-up, then waits for input no
    /// longer than the time left until the next one.
    pub fn run_event_loop(&mut self, controller: &mut PlaybackController) -> io::Result<()> {
        let started = Instant::now();
        let now_ms = || started.elapsed().as_millis() as u64;

        self.render_frame(&controller.render_state(now_ms()))?;

        loop {
            if controller.mode() == AppMode::Quit {
                return Ok(());
            }

            let now = now_ms();
            if let Some(wakeup) = controller.pending_wakeup() {
                if wakeup.due_ms <= now {
                    let outcome = controller.on_timer(wakeup, now);
                    debug!("tui: timer outcome={:?}", outcome);
                    self.render_frame(&controller.render_state(now))?;
                    continue;
                }
            }

            let timeout = controller
                .time_until_wakeup(now)
                .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let app_event = key_to_app_event(key);
                        if !controller.handle_event(app_event, now_ms()) {
                            return Ok(());
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => continue,
                }
                self.render_frame(&controller.render_state(now_ms()))?;
            }
        }
    }

    pub fn render_frame(&mut self, render: &RenderState) -> io::Result<()> {
        let theme = self.theme;

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Fill(1),
                    Constraint::Length(1), // marker
                    Constraint::Length(1), // word
                    Constraint::Length(1), // marker
                    Constraint::Length(1), // preview
                    Constraint::Fill(1),
                    Constraint::Length(1), // progress
                    Constraint::Length(1), // status
                ])
                .split(area);

            let focus_column = (area.width as f64 * FOCUS_COLUMN_RATIO) as usize;

            if render.mode == AppMode::ChapterBreak {
                frame.render_widget(render_chapter_break(render, &theme), rows[2]);
            } else if render.current_word.is_some() {
                frame.render_widget(render_focus_marker(focus_column, &theme), rows[1]);
                frame.render_widget(render_word_display(render, focus_column, &theme), rows[2]);
                frame.render_widget(render_focus_marker(focus_column, &theme), rows[3]);
                frame.render_widget(render_preview(render, focus_column, &theme), rows[4]);
            }

            frame.render_widget(render_progress_bar(render.progress, &theme), rows[6]);
            frame.render_widget(render_status_line(render, &theme), rows[7]);
        })?;

        Ok(())
    }
}

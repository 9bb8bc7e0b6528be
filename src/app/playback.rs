use std::time::Duration;

use log::debug;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::reading::timing::ramped_wpm;
use crate::reading::{NavigationTarget, ReadingState};

/// The single pending timer owned by a [`PlaybackController`].
///
/// A wake-up is only honoured while its generation matches the
/// controller's; pausing, seeking or navigating bumps the generation so a
/// timer that fires late can never move the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wakeup {
    pub generation: u64,
    pub due_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOutcome {
    /// Cancelled or superseded; nothing changed.
    Stale,
    /// The word at this index is now showing.
    Advanced(usize),
    /// Entered the chapter starting at this index; the interlude is showing.
    ChapterBreak(usize),
    Finished,
}

/// Cooperative scheduler for word-by-word playback.
///
/// The caller owns the clock. It passes the current time in milliseconds to
/// every call and delivers each [`Wakeup`] back through [`Self::on_timer`]
/// once `due_ms` is reached.
pub struct PlaybackController {
    state: ReadingState,
    mode: AppMode,
    generation: u64,
    pending: Option<Wakeup>,
    paused_in_chapter_break: bool,
    play_started_ms: u64,
}

impl PlaybackController {
    pub fn new(state: ReadingState) -> Self {
        Self {
            state,
            mode: AppMode::Paused,
            generation: 0,
            pending: None,
            paused_in_chapter_break: false,
            play_started_ms: 0,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn state(&self) -> &ReadingState {
        &self.state
    }

    pub fn pending_wakeup(&self) -> Option<Wakeup> {
        self.pending
    }

    /// Time left until the pending wake-up, zero if it is overdue.
    pub fn time_until_wakeup(&self, now_ms: u64) -> Option<Duration> {
        self.pending
            .map(|wakeup| Duration::from_millis(wakeup.due_ms.saturating_sub(now_ms)))
    }

    /// Effective WPM at `now_ms`, including the start-of-play ramp.
    pub fn effective_wpm(&self, now_ms: u64) -> u32 {
        let elapsed = now_ms.saturating_sub(self.play_started_ms);
        ramped_wpm(self.state.wpm(), elapsed, self.state.settings())
    }

    fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }

    fn arm(&mut self, due_ms: u64) -> Wakeup {
        let wakeup = Wakeup {
            generation: self.generation,
            due_ms,
        };
        self.pending = Some(wakeup);
        wakeup
    }

    fn arm_current_word(&mut self, now_ms: u64, extra_ms: u64) -> Wakeup {
        let interval = self.state.current_interval_at(self.effective_wpm(now_ms));
        self.arm(now_ms + interval.as_millis() as u64 + extra_ms)
    }

    /// Starts or resumes playback.
    ///
    /// The resume index is computed once from the paused position. A pause
    /// taken during a chapter-break interlude resumes on the chapter's first
    /// word without rewinding. The first word gets the orientation delay on
    /// top of its interval.
    pub fn play(&mut self, now_ms: u64) -> Option<Wakeup> {
        if self.mode.is_playing() {
            return self.pending;
        }
        if self.mode == AppMode::Quit {
            return None;
        }
        if self.state.is_empty() {
            self.mode = AppMode::Finished;
            return None;
        }

        let from = self.state.current_index();
        let resume = self.state.resume_index(self.paused_in_chapter_break);
        self.state.seek(resume);
        self.paused_in_chapter_break = false;
        self.play_started_ms = now_ms;
        self.mode = AppMode::Reading;
        self.cancel();

        let orientation = self.state.settings().orientation_delay_ms;
        let wakeup = self.arm_current_word(now_ms, orientation);
        debug!(
            "playback: play now_ms={} from={} resume={} wpm={} due_ms={}",
            now_ms,
            from,
            resume,
            self.state.wpm(),
            wakeup.due_ms
        );
        Some(wakeup)
    }

    /// Stops playback and drops the pending wake-up.
    pub fn pause(&mut self) {
        if !self.mode.is_playing() {
            return;
        }
        self.paused_in_chapter_break = self.mode == AppMode::ChapterBreak;
        self.mode = AppMode::Paused;
        self.cancel();
        debug!(
            "playback: pause index={} in_chapter_break={}",
            self.state.current_index(),
            self.paused_in_chapter_break
        );
    }

    pub fn toggle(&mut self, now_ms: u64) -> Option<Wakeup> {
        if self.mode.is_playing() {
            self.pause();
            None
        } else {
            self.play(now_ms)
        }
    }

    /// Handles a fired wake-up. Stale wake-ups are rejected before any state
    /// is touched; otherwise the next step is taken and re-armed.
    pub fn on_timer(&mut self, wakeup: Wakeup, now_ms: u64) -> TimerOutcome {
        if !self.mode.is_playing() || wakeup.generation != self.generation || self.pending != Some(wakeup) {
            return TimerOutcome::Stale;
        }
        self.pending = None;

        if self.mode == AppMode::ChapterBreak {
            self.mode = AppMode::Reading;
            self.arm_current_word(now_ms, 0);
            return TimerOutcome::Advanced(self.state.current_index());
        }

        if !self.state.advance() {
            self.mode = AppMode::Finished;
            self.cancel();
            debug!("playback: finished index={}", self.state.current_index());
            return TimerOutcome::Finished;
        }

        let index = self.state.current_index();
        let break_ms = self.state.settings().chapter_break_delay_ms;
        if break_ms > 0 && index > 0 {
            if let Some(section) = self.state.section_starting_at(index) {
                debug!(
                    "playback: chapter break index={} label={:?} delay_ms={}",
                    index, section.label, break_ms
                );
                self.mode = AppMode::ChapterBreak;
                self.arm(now_ms + break_ms);
                return TimerOutcome::ChapterBreak(index);
            }
        }

        self.arm_current_word(now_ms, 0);
        TimerOutcome::Advanced(index)
    }

    fn after_jump(&mut self, now_ms: u64) {
        self.paused_in_chapter_break = false;
        match self.mode {
            AppMode::Reading | AppMode::ChapterBreak => {
                self.mode = AppMode::Reading;
                self.cancel();
                self.arm_current_word(now_ms, 0);
            }
            AppMode::Finished => self.mode = AppMode::Paused,
            AppMode::Paused | AppMode::Quit => {}
        }
    }

    pub fn navigate(&mut self, target: NavigationTarget, now_ms: u64) -> usize {
        let from = self.state.current_index();
        let index = self.state.navigate(target);
        debug!("playback: navigate target={} from={} to={}", target, from, index);
        self.after_jump(now_ms);
        index
    }

    pub fn seek(&mut self, index: usize, now_ms: u64) -> usize {
        let index = self.state.seek(index);
        self.after_jump(now_ms);
        index
    }

    /// Changes the target WPM; the next armed interval picks it up.
    pub fn adjust_wpm(&mut self, delta: i32) {
        self.state.adjust_wpm(delta);
    }

    pub fn quit(&mut self) {
        self.mode = AppMode::Quit;
        self.cancel();
    }

    /// Applies a front-end request. Returns false once the session should end.
    pub fn handle_event(&mut self, event: AppEvent, now_ms: u64) -> bool {
        match event {
            AppEvent::TogglePlay => {
                self.toggle(now_ms);
            }
            AppEvent::Navigate(target) => {
                self.navigate(target, now_ms);
            }
            AppEvent::AdjustWpm(delta) => self.adjust_wpm(delta),
            AppEvent::Quit => self.quit(),
            AppEvent::None => {}
        }
        self.mode != AppMode::Quit
    }

    pub fn render_state(&self, now_ms: u64) -> RenderState {
        let wpm = if self.mode.is_playing() {
            self.effective_wpm(now_ms)
        } else {
            self.state.wpm()
        };
        RenderState::from_reading_state(self.mode, &self.state, wpm)
    }
}

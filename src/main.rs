mod ui;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{debug, info};
use serde::Serialize;

use rsvp_engine::app::PlaybackController;
use rsvp_engine::engine::{RsvpSettings, DEFAULT_WPM};
use rsvp_engine::input::{self, LoadedDocument};
use rsvp_engine::reading::{ReadingState, Section, WordToken};

use crate::ui::{ChunkMode, TuiManager};

/// Speed-read a book one word at a time.
#[derive(Parser, Debug)]
#[command(name = "rsvp", version, about)]
struct Args {
    /// Book to read: .epub, .pdf, .xhtml/.html, or plain text.
    /// Reads the clipboard when omitted.
    path: Option<PathBuf>,

    /// Target reading speed in words per minute (clamped to 50..=1000)
    #[arg(long, default_value_t = DEFAULT_WPM)]
    wpm: u32,

    /// JSON file overriding pacing settings; missing fields keep their defaults
    #[arg(long, value_name = "JSON")]
    settings: Option<PathBuf>,

    /// Word index to start from
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Print chunks (paragraph:N or chars:N) as JSON lines instead of playing
    #[arg(long, value_name = "MODE")]
    chunks: Option<ChunkMode>,

    /// Print tokens and sections as JSON instead of playing
    #[arg(long)]
    dump: bool,
}

#[derive(Serialize)]
struct Dump<'a> {
    source: &'a str,
    sections: &'a [Section],
    tokens: &'a [WordToken],
}

fn load_settings(path: Option<&Path>) -> Result<RsvpSettings, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(RsvpSettings::default());
    };
    let raw = std::fs::read_to_string(path)?;
    let settings: RsvpSettings = serde_json::from_str(&raw)?;
    settings.validate()?;
    debug!("settings: loaded from {}: {:?}", path.display(), settings);
    Ok(settings)
}

fn load_document(path: Option<&Path>) -> Result<LoadedDocument, input::LoadError> {
    match path {
        Some(path) => input::load_path(path),
        None => input::clipboard::load(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = load_settings(args.settings.as_deref())?;
    let document = load_document(args.path.as_deref())?;
    info!(
        "loaded {}: {} words, {} sections",
        document.source,
        document.tokens.len(),
        document.sections.len()
    );

    if args.dump {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(
            &mut out,
            &Dump {
                source: &document.source,
                sections: &document.sections,
                tokens: &document.tokens,
            },
        )?;
        writeln!(out)?;
        return Ok(());
    }

    if let Some(mode) = args.chunks {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for chunk in mode.apply(&document.tokens) {
            serde_json::to_writer(&mut out, &chunk)?;
            writeln!(out)?;
        }
        return Ok(());
    }

    let mut state = ReadingState::new(document.tokens, document.sections, args.wpm, settings);
    state.seek(args.start);
    let mut controller = PlaybackController::new(state);

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut controller)?;

    Ok(())
}

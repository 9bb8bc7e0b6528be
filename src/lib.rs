//! Word segmentation and pacing for rapid serial visual presentation.
//!
//! Books are loaded from EPUB, PDF, (X)HTML, plain text or the clipboard
//! (`input`), flattened into a token stream with paragraph and sentence
//! boundaries (`reading`), and played back one word at a time by a
//! timer-driven controller (`app`). Pacing knobs live in `engine::config`.

pub mod app;
pub mod engine;
pub mod input;
pub mod reading;

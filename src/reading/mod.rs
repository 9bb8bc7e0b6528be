pub mod chunk;
pub mod document;
pub mod extract;
pub mod navigation;
pub mod ovp;
pub mod quote;
pub mod resume;
pub mod state;
pub mod timing;
pub mod token;

pub use chunk::{
    chunk_text_by_char_limit, chunk_text_by_paragraph, chunk_words_by_char_limit,
    chunk_words_by_paragraph, Chunk,
};
pub use document::{Document, Element, Node};
pub use extract::{extract_words_from_doc, extract_words_from_text};
pub use navigation::{calculate_navigation_target, NavigationTarget};
pub use ovp::{calculate_anchor_position, split_word, OrpSplit};
pub use quote::find_quote_index;
pub use resume::{find_rewind_target, get_resume_index};
pub use state::ReadingState;
pub use timing::{calculate_rsvp_interval, wpm_to_milliseconds};
pub use token::{Section, WordToken};

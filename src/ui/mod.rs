pub mod command;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use command::ChunkMode;
pub use terminal::TuiManager;

pub mod event;
pub mod mode;
pub mod playback;
pub mod render_state;

pub use event::AppEvent;
pub use mode::AppMode;
pub use playback::{PlaybackController, TimerOutcome, Wakeup};
pub use render_state::RenderState;

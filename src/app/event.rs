use crate::reading::NavigationTarget;

/// Requests a front-end can make of the playback controller.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppEvent {
    TogglePlay,
    Navigate(NavigationTarget),
    AdjustWpm(i32),
    Quit,
    None,
}

use std::path::PathBuf;

use blindtest_core::consts::SLOT_COUNT;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Config file the survey was loaded from (None = built-in defaults).
    pub config_path: Option<PathBuf>,

    /// Whether the pointer was inside each interactive surface last frame,
    /// used to turn positions into enter/leave events.
    pub pointer_inside: [bool; SLOT_COUNT],

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

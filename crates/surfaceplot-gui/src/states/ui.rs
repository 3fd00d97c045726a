use std::path::PathBuf;

use surfaceplot_core::controller::CursorReadout;
use surfaceplot_core::field::DataRange;
use surfaceplot_core::view::ColorLevels;

/// Overall UI state, updated from controller events.
#[derive(Default)]
pub struct UIState {
    pub file_path: Option<PathBuf>,
    pub title: String,

    pub data_range: Option<DataRange>,
    /// Color levels as shown in the level editors.
    pub levels: Option<ColorLevels>,

    /// Formatted real coordinate of each marker.
    pub horizontal_label: String,
    pub vertical_label: String,

    pub cursor: Option<CursorReadout>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Message shown in the modal error window.
    pub error: Option<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn report_error(&mut self, msg: String) {
        self.add_log(format!("ERROR: {msg}"));
        self.error = Some(msg);
    }
}

mod export;
mod ui;
mod viewport;

pub use export::ExportDialogState;
pub use ui::UIState;
pub use viewport::{SectionPlotState, ViewportState};

use std::path::PathBuf;

/// Requests produced off the UI thread (file dialogs) and applied on the
/// next frame.
pub enum UiCommand {
    LoadFile { path: PathBuf },
    SetOutputRoot { path: PathBuf },
}

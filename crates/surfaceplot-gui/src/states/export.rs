use surfaceplot_core::export::ExportSelection;

/// Export dialog: which artifacts to write.
pub struct ExportDialogState {
    pub open: bool,
    pub selection: ExportSelection,
}

impl Default for ExportDialogState {
    fn default() -> Self {
        Self {
            open: false,
            selection: ExportSelection::all(),
        }
    }
}

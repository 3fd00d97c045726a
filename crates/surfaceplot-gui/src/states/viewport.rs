use surfaceplot_core::view::Orientation;

/// Heatmap display state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Field size as [cols, rows].
    pub image_size: Option<[usize; 2]>,
    /// Rebuild the texture before the next paint.
    pub texture_dirty: bool,
    /// Marker being dragged, if any.
    pub dragging: Option<Orientation>,
    /// Sample overlay in field pixel space.
    pub overlay: Option<Vec<[f64; 2]>>,
}

/// Per-plot state of the two cross-section views.
#[derive(Default)]
pub struct SectionPlotState {
    /// Restore the default bounds on the next paint.
    pub reset_pending: bool,
}

use std::path::Path;
use std::sync::mpsc;

use surfaceplot_core::config::SessionConfig;
use surfaceplot_core::controller::{InteractionController, ViewEvent};
use surfaceplot_core::error::Result;
use surfaceplot_core::interpolate::Method;
use surfaceplot_core::view::{ColorLevels, Orientation};
use tracing::info;

use crate::convert::field_to_color_image;
use crate::messages::UiCommand;
use crate::panels;
use crate::states::{ExportDialogState, SectionPlotState, UIState, ViewportState};

pub struct SurfacePlotApp {
    pub controller: InteractionController,
    pub event_rx: mpsc::Receiver<ViewEvent>,
    pub cmd_tx: mpsc::Sender<UiCommand>,
    pub cmd_rx: mpsc::Receiver<UiCommand>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub horizontal_plot: SectionPlotState,
    pub vertical_plot: SectionPlotState,
    pub export_dialog: ExportDialogState,
    pub show_about: bool,
}

impl SurfacePlotApp {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let mut controller = InteractionController::new(config)?;
        let (event_tx, event_rx) = mpsc::channel();
        controller.subscribe(move |event| {
            let _ = event_tx.send(event.clone());
        });
        let (cmd_tx, cmd_rx) = mpsc::channel();

        let mut ui_state = UIState::default();
        if let Some(root) = controller.exporter().output_root() {
            ui_state.add_log(format!("Output directory: {}", root.display()));
        }

        Ok(Self {
            controller,
            event_rx,
            cmd_tx,
            cmd_rx,
            ui_state,
            viewport: ViewportState::default(),
            horizontal_plot: SectionPlotState::default(),
            vertical_plot: SectionPlotState::default(),
            export_dialog: ExportDialogState::default(),
            show_about: false,
        })
    }

    /// Apply requests queued by file dialogs.
    fn poll_commands(&mut self) {
        while let Ok(cmd) = self.cmd_rx.try_recv() {
            match cmd {
                UiCommand::LoadFile { path } => self.load_file(&path),
                UiCommand::SetOutputRoot { path } => {
                    match self.controller.set_output_root(&path) {
                        Ok(()) => self
                            .ui_state
                            .add_log(format!("Output directory: {}", path.display())),
                        Err(e) => self.ui_state.report_error(e.to_string()),
                    }
                }
            }
        }
    }

    /// Drain all pending controller events.
    fn poll_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                ViewEvent::Loaded { title, path } => {
                    self.ui_state.add_log(format!("Opened: {}", path.display()));
                    self.ui_state.file_path = Some(path);
                    self.ui_state.title = title;
                    self.ui_state.cursor = None;
                }
                ViewEvent::FieldReplaced {
                    rows,
                    cols,
                    method,
                    data_range,
                } => {
                    self.ui_state
                        .add_log(format!("{method} interpolation: {cols}x{rows}"));
                    self.ui_state.data_range = data_range;
                    self.viewport.image_size = Some([cols, rows]);
                    self.viewport.texture_dirty = true;
                    self.horizontal_plot.reset_pending = true;
                    self.vertical_plot.reset_pending = true;
                }
                ViewEvent::ColorLevels(levels) => {
                    self.ui_state.levels = Some(levels);
                    self.viewport.texture_dirty = true;
                }
                ViewEvent::CrossSection {
                    orientation, label, ..
                } => match orientation {
                    Orientation::Horizontal => self.ui_state.horizontal_label = label,
                    Orientation::Vertical => self.ui_state.vertical_label = label,
                },
                ViewEvent::Cursor(readout) => self.ui_state.cursor = Some(readout),
                ViewEvent::PointsOverlay(pixels) => self.viewport.overlay = Some(pixels),
                ViewEvent::OverlayCleared => self.viewport.overlay = None,
            }
        }
    }

    fn update_viewport_texture(&mut self, ctx: &egui::Context) {
        if !self.viewport.texture_dirty {
            return;
        }
        self.viewport.texture_dirty = false;

        let (Some(field), Some(levels)) = (self.controller.field(), self.ui_state.levels) else {
            self.viewport.texture = None;
            return;
        };
        let image = field_to_color_image(field, levels);
        let texture = ctx.load_texture("heatmap", image, egui::TextureOptions::NEAREST);
        self.viewport.texture = Some(texture);
    }

    pub fn load_file(&mut self, path: &Path) {
        info!(path = %path.display(), "Loading");
        if let Err(e) = self.controller.load_file(path) {
            self.ui_state.report_error(e.to_string());
        }
    }

    pub fn set_resolution(&mut self, resolution: usize) {
        if let Err(e) = self.controller.set_resolution(resolution) {
            self.ui_state.report_error(e.to_string());
        }
    }

    pub fn set_method(&mut self, method: Method) {
        if let Err(e) = self.controller.set_method(method) {
            self.ui_state.report_error(e.to_string());
        }
    }

    pub fn set_color_levels(&mut self, levels: ColorLevels) {
        self.controller.set_color_levels(levels);
    }

    pub fn export(&mut self) {
        match self.controller.export(self.export_dialog.selection) {
            Ok(written) if written.is_empty() => self
                .ui_state
                .add_log("Export skipped: output directory or file name not set".into()),
            Ok(written) => {
                for path in written {
                    self.ui_state.add_log(format!("Exported: {}", path.display()));
                }
            }
            Err(e) => self.ui_state.report_error(e.to_string()),
        }
    }
}

impl eframe::App for SurfacePlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_commands();
        self.poll_events();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::cross_section::show(ctx, self);

        // Panels above may have changed the field or levels.
        self.poll_events();
        self.update_viewport_texture(ctx);
        panels::viewport::show(ctx, self);
        self.poll_events();

        panels::export_dialog::show(ctx, self);
        show_error(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About SurfacePlot")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("SurfacePlot");
                        ui.label("Scattered x, y, z data on a regular grid");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn show_error(ctx: &egui::Context, app: &mut SurfacePlotApp) {
    let Some(message) = app.ui_state.error.clone() else {
        return;
    };
    egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
        ui.set_width(360.0);
        ui.heading("Error");
        ui.add_space(4.0);
        ui.label(message);
        ui.add_space(8.0);
        if ui.button("OK").clicked() {
            app.ui_state.error = None;
        }
    });
}

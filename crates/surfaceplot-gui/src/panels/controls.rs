use surfaceplot_core::consts::{MAX_RESOLUTION, MIN_RESOLUTION};
use surfaceplot_core::interpolate::Method;
use surfaceplot_core::view::ColorLevels;

use super::helpers::{enum_combo, section_header, value_row};
use super::menu_bar::{open_file, pick_output_root};
use crate::app::SurfacePlotApp;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut SurfacePlotApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                grid_section(ui, app);
                ui.separator();
                display_section(ui, app);
                ui.separator();
                export_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut SurfacePlotApp) {
    section_header(ui, "File", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        open_file(ui.ctx(), app);
    }

    if let Some(ref path) = app.ui_state.file_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }

    if let Some(points) = app.controller.interpolator().points() {
        ui.small(format!("{} samples", points.len()));
    }
}

fn grid_section(ui: &mut egui::Ui, app: &mut SurfacePlotApp) {
    let status = app
        .controller
        .field()
        .map(|f| format!("{}x{}", f.cols(), f.rows()));
    section_header(ui, "Grid", status.as_deref());
    ui.add_space(4.0);

    let mut resolution = app.controller.resolution();
    let response = ui.add(
        egui::Slider::new(&mut resolution, MIN_RESOLUTION..=MAX_RESOLUTION)
            .text("Resolution")
            .clamping(egui::SliderClamping::Always),
    );
    // Dragging the slider would re-interpolate on every step.
    let committed = response.drag_stopped() || (response.changed() && !response.dragged());
    if committed && resolution != app.controller.resolution() {
        app.set_resolution(resolution);
    }

    let mut method = app.controller.method();
    if enum_combo(ui, "Method", &mut method, &Method::ALL) {
        app.set_method(method);
    }
}

fn display_section(ui: &mut egui::Ui, app: &mut SurfacePlotApp) {
    section_header(ui, "Display", None);
    ui.add_space(4.0);

    let mut show_points = app.controller.show_points();
    if ui.checkbox(&mut show_points, "Show sample points").changed() {
        app.controller.set_show_points(show_points);
    }

    ui.add_space(4.0);
    ui.label("Color levels");
    let loaded = app.controller.is_loaded();
    ui.add_enabled_ui(loaded, |ui| {
        let current = app
            .ui_state
            .levels
            .unwrap_or(ColorLevels { min: 0.0, max: 1.0 });
        let mut levels = current;
        let speed = ((current.max - current.min).abs() / 200.0).max(1e-6);
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(&mut levels.min).speed(speed).prefix("min "));
            ui.add(egui::DragValue::new(&mut levels.max).speed(speed).prefix("max "));
        });
        if levels != current {
            app.set_color_levels(levels);
        }
        if ui.button("Reset levels").clicked() {
            app.controller.reset_color_levels();
        }
    });

    ui.add_space(4.0);
    match app.ui_state.data_range {
        Some(range) => {
            value_row(ui, "Max", format!("{:.4}", range.max));
            value_row(ui, "Min", format!("{:.4}", range.min));
            value_row(ui, "Delta", format!("{:.4}", range.delta));
        }
        None if loaded => {
            ui.small("All samples undefined");
        }
        None => {}
    }
}

fn export_section(ui: &mut egui::Ui, app: &mut SurfacePlotApp) {
    section_header(ui, "Export", None);
    ui.add_space(4.0);

    match app.controller.exporter().output_root() {
        Some(root) => {
            ui.small(root.display().to_string());
        }
        None => {
            ui.small("No output directory");
        }
    }
    if ui.button("Output Directory...").clicked() {
        pick_output_root(ui.ctx(), app);
    }

    ui.add_space(4.0);
    let button = ui.add_sized(
        [ui.available_width(), 28.0],
        egui::Button::new("Export..."),
    );
    if button.clicked() {
        app.export_dialog.open = true;
    }
}

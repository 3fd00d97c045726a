use egui_plot::{Line, Plot, PlotBounds, Points};
use surfaceplot_core::view::{Orientation, ViewBounds};

use crate::app::SurfacePlotApp;

const BOTTOM_PLOT_HEIGHT: f32 = 200.0;
const RIGHT_PLOT_WIDTH: f32 = 260.0;
const CURVE_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 170, 255);
const CURSOR_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);

/// Horizontal section below the heatmap, vertical section to its right.
pub fn show(ctx: &egui::Context, app: &mut SurfacePlotApp) {
    egui::TopBottomPanel::bottom("horizontal_section")
        .resizable(true)
        .default_height(BOTTOM_PLOT_HEIGHT)
        .show(ctx, |ui| section_plot(ui, app, Orientation::Horizontal));

    egui::SidePanel::right("vertical_section")
        .resizable(true)
        .default_width(RIGHT_PLOT_WIDTH)
        .show(ctx, |ui| section_plot(ui, app, Orientation::Vertical));
}

fn section_plot(ui: &mut egui::Ui, app: &mut SurfacePlotApp, orientation: Orientation) {
    let label = match orientation {
        Orientation::Horizontal => format!("y = {}", app.ui_state.horizontal_label),
        Orientation::Vertical => format!("x = {}", app.ui_state.vertical_label),
    };

    let reset_clicked = ui
        .horizontal(|ui| {
            ui.strong(format!("{orientation} section"));
            if app.controller.is_loaded() {
                ui.label(label);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.button("Reset view").clicked()
            })
            .inner
        })
        .inner;

    let plot_state = match orientation {
        Orientation::Horizontal => &mut app.horizontal_plot,
        Orientation::Vertical => &mut app.vertical_plot,
    };
    let reset = std::mem::take(&mut plot_state.reset_pending) || reset_clicked;

    let controller = &app.controller;
    let along = controller.axis(orientation.along());
    let view = controller.section(orientation);
    let curve = view.curve(along);
    let cursor = view.cursor_point(along);
    let bounds = controller.reset_view(orientation);

    let (x_label, y_label) = match orientation {
        Orientation::Horizontal => ("x", "value"),
        Orientation::Vertical => ("value", "y"),
    };

    Plot::new(format!("{orientation}_section_plot"))
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_zoom(true)
        .allow_drag(true)
        .show(ui, |plot_ui| {
            if reset {
                plot_ui.set_plot_bounds(plot_bounds(bounds));
            }
            if !curve.is_empty() {
                plot_ui.line(Line::new("section", curve).color(CURVE_COLOR));
            }
            if let Some(point) = cursor {
                plot_ui.points(
                    Points::new("cursor", vec![point])
                        .color(CURSOR_COLOR)
                        .radius(4.0),
                );
            }
        });
}

/// Plot bounds for a reset view. Zero-width spans are widened so the plot
/// stays invertible.
fn plot_bounds(bounds: ViewBounds) -> PlotBounds {
    let widen = |(lo, hi): (f64, f64)| {
        if hi > lo {
            (lo, hi)
        } else {
            (lo - 0.5, hi + 0.5)
        }
    };
    let (x0, x1) = widen(bounds.x);
    let (y0, y1) = widen(bounds.y);
    PlotBounds::from_min_max([x0, y0], [x1, y1])
}

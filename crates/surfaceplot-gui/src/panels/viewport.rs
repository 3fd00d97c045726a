use surfaceplot_core::axis::AxisMapping;
use surfaceplot_core::view::{ColorLevels, Orientation};

use crate::app::SurfacePlotApp;
use crate::convert::colormap;

/// Room for tick labels left of and below the image.
const AXIS_MARGIN: egui::Vec2 = egui::vec2(64.0, 28.0);
/// Color bar width plus its labels.
const COLORBAR_WIDTH: f32 = 72.0;
const TICK_COUNT: usize = 5;
/// Pointer distance (screen px) at which a marker line can be grabbed.
const GRAB_DISTANCE: f32 = 8.0;

const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 255, 0);
const OVERLAY_COLOR: egui::Color32 = egui::Color32::WHITE;

pub fn show(ctx: &egui::Context, app: &mut SurfacePlotApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        let texture_id = app.viewport.texture.as_ref().map(|t| t.id());
        let (Some(texture_id), Some([cols, rows])) = (texture_id, app.viewport.image_size) else {
            show_placeholder(ui);
            return;
        };

        let plot_rect = egui::Rect::from_min_max(
            rect.min,
            egui::pos2(rect.max.x - COLORBAR_WIDTH, rect.max.y - AXIS_MARGIN.y),
        );
        let img_rect = egui::Rect::from_min_max(
            egui::pos2(plot_rect.min.x + AXIS_MARGIN.x, plot_rect.min.y + 8.0),
            plot_rect.max,
        );
        if img_rect.width() <= 0.0 || img_rect.height() <= 0.0 {
            return;
        }
        let layout = ImageLayout {
            rect: img_rect,
            cols,
            rows,
        };

        let response = ui.allocate_rect(img_rect, egui::Sense::click_and_drag());
        handle_cursor(ui, &response, app, &layout);
        handle_marker_drag(ui, &response, app, &layout);

        draw_image(ui, texture_id, img_rect);
        if let Some(ref overlay) = app.viewport.overlay {
            draw_overlay(ui, overlay, &layout);
        }
        draw_markers(ui, app, &layout);
        draw_ticks(ui, app.controller.x_axis(), app.controller.y_axis(), &layout);
        if let Some(levels) = app.ui_state.levels {
            draw_colorbar(ui, levels, rect, img_rect);
        }
        draw_title(ui, rect, &app.ui_state.title);
    });
}

/// Screen placement of the field image. Field row 0 is at the bottom.
struct ImageLayout {
    rect: egui::Rect,
    cols: usize,
    rows: usize,
}

impl ImageLayout {
    /// Field pixel coordinates (col, row) of a screen position.
    fn to_field(&self, pos: egui::Pos2) -> (f64, f64) {
        let col = (pos.x - self.rect.left()) / self.rect.width() * self.cols as f32;
        let row = (self.rect.bottom() - pos.y) / self.rect.height() * self.rows as f32;
        (col as f64, row as f64)
    }

    fn col_to_x(&self, col: f64) -> f32 {
        self.rect.left() + (col / self.cols as f64) as f32 * self.rect.width()
    }

    fn row_to_y(&self, row: f64) -> f32 {
        self.rect.bottom() - (row / self.rows as f64) as f32 * self.rect.height()
    }

    fn marker_position(&self, orientation: Orientation, index: usize) -> f32 {
        match orientation {
            Orientation::Horizontal => self.row_to_y(index as f64 + 0.5),
            Orientation::Vertical => self.col_to_x(index as f64 + 0.5),
        }
    }
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn handle_cursor(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut SurfacePlotApp,
    layout: &ImageLayout,
) {
    if !response.hovered() {
        return;
    }
    if let Some(pos) = ui.input(|i| i.pointer.hover_pos()) {
        let (col, row) = layout.to_field(pos);
        app.controller.cursor_moved(col, row);
    }
}

fn handle_marker_drag(
    ui: &egui::Ui,
    response: &egui::Response,
    app: &mut SurfacePlotApp,
    layout: &ImageLayout,
) {
    if response.drag_started_by(egui::PointerButton::Primary) {
        app.viewport.dragging = response
            .interact_pointer_pos()
            .and_then(|pos| nearest_marker(app, layout, pos));
    }
    if response.drag_stopped() {
        app.viewport.dragging = None;
    }

    let Some(orientation) = app.viewport.dragging else {
        return;
    };
    if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
        let (col, row) = layout.to_field(pos);
        let position = match orientation {
            Orientation::Horizontal => row,
            Orientation::Vertical => col,
        };
        app.controller.move_marker(orientation, position);
    }
}

/// Marker line within grab distance of `pos`, closest first.
fn nearest_marker(
    app: &SurfacePlotApp,
    layout: &ImageLayout,
    pos: egui::Pos2,
) -> Option<Orientation> {
    let h = layout.marker_position(
        Orientation::Horizontal,
        app.controller.section(Orientation::Horizontal).index(),
    );
    let v = layout.marker_position(
        Orientation::Vertical,
        app.controller.section(Orientation::Vertical).index(),
    );
    let (dh, dv) = ((pos.y - h).abs(), (pos.x - v).abs());

    if dh.min(dv) > GRAB_DISTANCE {
        return None;
    }
    Some(if dh <= dv {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    })
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_overlay(ui: &egui::Ui, overlay: &[[f64; 2]], layout: &ImageLayout) {
    let painter = ui.painter_at(layout.rect.expand(4.0));
    for &[px, py] in overlay {
        let center = egui::pos2(layout.col_to_x(px), layout.row_to_y(py));
        painter.circle_stroke(center, 3.0, egui::Stroke::new(1.0, OVERLAY_COLOR));
    }
}

fn draw_markers(ui: &egui::Ui, app: &SurfacePlotApp, layout: &ImageLayout) {
    let painter = ui.painter_at(layout.rect);
    let stroke = egui::Stroke::new(1.0, MARKER_COLOR);

    let y = layout.marker_position(
        Orientation::Horizontal,
        app.controller.section(Orientation::Horizontal).index(),
    );
    painter.hline(layout.rect.x_range(), y, stroke);

    let x = layout.marker_position(
        Orientation::Vertical,
        app.controller.section(Orientation::Vertical).index(),
    );
    painter.vline(x, layout.rect.y_range(), stroke);
}

fn draw_ticks(ui: &egui::Ui, x_axis: &AxisMapping, y_axis: &AxisMapping, layout: &ImageLayout) {
    let painter = ui.painter();
    let color = egui::Color32::from_gray(180);
    let font = egui::FontId::monospace(11.0);
    let stroke = egui::Stroke::new(1.0, color);

    for i in 0..TICK_COUNT {
        let t = i as f64 / (TICK_COUNT - 1) as f64;

        let col = t * layout.cols as f64;
        let x = layout.col_to_x(col);
        let bottom = layout.rect.bottom();
        painter.line_segment([egui::pos2(x, bottom), egui::pos2(x, bottom + 4.0)], stroke);
        painter.text(
            egui::pos2(x, bottom + 6.0),
            egui::Align2::CENTER_TOP,
            x_axis.tick_label(col),
            font.clone(),
            color,
        );

        let row = t * layout.rows as f64;
        let y = layout.row_to_y(row);
        let left = layout.rect.left();
        painter.line_segment([egui::pos2(left - 4.0, y), egui::pos2(left, y)], stroke);
        painter.text(
            egui::pos2(left - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            y_axis.tick_label(row),
            font.clone(),
            color,
        );
    }
}

fn draw_colorbar(ui: &egui::Ui, levels: ColorLevels, rect: egui::Rect, img_rect: egui::Rect) {
    let bar = egui::Rect::from_min_max(
        egui::pos2(rect.max.x - COLORBAR_WIDTH + 12.0, img_rect.top()),
        egui::pos2(rect.max.x - COLORBAR_WIDTH + 28.0, img_rect.bottom()),
    );
    let painter = ui.painter();
    let steps = 64;
    let step_height = bar.height() / steps as f32;

    for i in 0..steps {
        // Max at the top.
        let t = 1.0 - i as f64 / steps as f64;
        let y_start = bar.top() + i as f32 * step_height;
        painter.rect_filled(
            egui::Rect::from_min_size(
                egui::pos2(bar.left(), y_start),
                egui::vec2(bar.width(), step_height + 1.0),
            ),
            0.0,
            colormap(t),
        );
    }
    painter.rect_stroke(
        bar,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
        egui::StrokeKind::Outside,
    );

    let color = egui::Color32::from_gray(180);
    let font = egui::FontId::monospace(10.0);
    painter.text(
        egui::pos2(bar.left(), bar.top() - 2.0),
        egui::Align2::LEFT_BOTTOM,
        format!("{:.3}", levels.max),
        font.clone(),
        color,
    );
    painter.text(
        egui::pos2(bar.left(), bar.bottom() + 2.0),
        egui::Align2::LEFT_TOP,
        format!("{:.3}", levels.min),
        font,
        color,
    );
}

fn draw_title(ui: &egui::Ui, rect: egui::Rect, title: &str) {
    if title.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        title,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("Open a CSV file with x, y, z columns to begin")
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}

use crate::app::SurfacePlotApp;

pub fn show(ctx: &egui::Context, app: &mut SurfacePlotApp) {
    if !app.export_dialog.open {
        return;
    }

    let mut open = true;
    let mut export_clicked = false;
    egui::Window::new("Export")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let selection = &mut app.export_dialog.selection;
            ui.checkbox(&mut selection.image, "Image");
            ui.checkbox(&mut selection.image_coord, "Image with coordinates");
            ui.checkbox(&mut selection.horizontal, "Horizontal cross-section");
            ui.checkbox(&mut selection.vertical, "Vertical cross-section");

            ui.add_space(4.0);
            match app.controller.exporter().output_root() {
                Some(root) => ui.small(format!("To {}", root.display())),
                None => ui.small("No output directory set"),
            };

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let enabled = !app.export_dialog.selection.is_empty();
                if ui.add_enabled(enabled, egui::Button::new("Export")).clicked() {
                    export_clicked = true;
                }
                if ui.button("Cancel").clicked() {
                    app.export_dialog.open = false;
                }
            });
        });

    if export_clicked {
        app.export_dialog.open = false;
        app.export();
    }
    if !open {
        app.export_dialog.open = false;
    }
}

use crate::app::SurfacePlotApp;
use crate::messages::UiCommand;

pub fn show(ctx: &egui::Context, app: &mut SurfacePlotApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_file(ctx, app);
                }

                if ui.button("Output Directory...").clicked() {
                    ui.close();
                    pick_output_root(ctx, app);
                }

                ui.separator();

                let export_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E);
                if ui.add(egui::Button::new("Export...").shortcut_text(ctx.format_shortcut(&export_shortcut))).clicked() {
                    ui.close();
                    app.export_dialog.open = true;
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_file(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::E))) {
            app.export_dialog.open = true;
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

pub(crate) fn open_file(ctx: &egui::Context, app: &SurfacePlotApp) {
    let cmd_tx = app.cmd_tx.clone();
    let ctx = ctx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(UiCommand::LoadFile { path });
            ctx.request_repaint();
        }
    });
}

pub(crate) fn pick_output_root(ctx: &egui::Context, app: &SurfacePlotApp) {
    let cmd_tx = app.cmd_tx.clone();
    let ctx = ctx.clone();
    let start = app.controller.exporter().output_root().map(|p| p.to_path_buf());
    std::thread::spawn(move || {
        let mut dialog = rfd::FileDialog::new();
        if let Some(dir) = start {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_folder() {
            let _ = cmd_tx.send(UiCommand::SetOutputRoot { path });
            ctx.request_repaint();
        }
    });
}

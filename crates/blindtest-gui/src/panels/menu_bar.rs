use serde::Serialize;
use tracing::warn;

use blindtest_core::survey::SurveyState;

use crate::app::BlindTestApp;
use crate::messages::WorkerCommand;

const OPEN: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const QUIT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

/// Answers as written by "Export Responses...".
#[derive(Serialize)]
struct ResponsesExport<'a> {
    title: &'a str,
    group_label: &'a str,
    survey: &'a SurveyState,
}

pub fn show(ctx: &egui::Context, app: &mut BlindTestApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Load Survey Config...").shortcut_text(ctx.format_shortcut(&OPEN))).clicked() {
                    ui.close();
                    load_config(app);
                }

                if ui.add(egui::Button::new("Export Responses...").shortcut_text(ctx.format_shortcut(&SAVE))).clicked() {
                    ui.close();
                    export_responses(app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&QUIT))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Reset All Zoom").clicked() {
                    ui.close();
                    app.engine.reset_all();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            load_config(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            export_responses(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn load_config(app: &mut BlindTestApp) {
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::LoadConfig { path });
        }
    });
}

fn export_responses(app: &mut BlindTestApp) {
    let export = ResponsesExport {
        title: &app.config.title,
        group_label: &app.config.group_label,
        survey: &app.survey,
    };
    let content = match toml::to_string_pretty(&export) {
        Ok(content) => content,
        Err(e) => {
            app.ui_state.add_log(format!("ERROR: failed to serialise responses: {e}"));
            return;
        }
    };

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("responses.toml")
            .save_file()
        {
            if let Err(e) = std::fs::write(&path, content) {
                warn!("failed to write {}: {e}", path.display());
            }
        }
    });
}

use blindtest_core::consts::SLOT_COUNT;

use crate::app::BlindTestApp;

pub fn show(ctx: &egui::Context, app: &mut BlindTestApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed at three lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            ui.label(format!("Images: {}/{SLOT_COUNT}", app.images.loaded()));
            ui.separator();
            ui.label(format!(
                "Answered: {}/{}",
                app.survey.completed_groups(),
                app.survey.total_groups()
            ));
            ui.separator();
            ui.label(app.engine.lock_context().to_string());
            if let Some(slot) = app.engine.hovered() {
                if let Ok(vp) = app.engine.viewport(slot) {
                    ui.separator();
                    ui.label(format!("Zoom: {:.0}%", vp.scale * 100.0));
                }
            }
            if let Some(ref path) = app.ui_state.config_path {
                ui.separator();
                ui.label(path.display().to_string());
            }
        });

        ui.add_space(2.0);
    });
}

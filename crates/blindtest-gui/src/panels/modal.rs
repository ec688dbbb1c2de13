use blindtest_core::geometry::ContainerPreset;
use blindtest_core::viewport::DisplayContext;

use crate::app::BlindTestApp;
use crate::panels::viewport;

pub fn show(ctx: &egui::Context, app: &mut BlindTestApp) {
    match app.engine.display().clone() {
        DisplayContext::Grid => {}
        DisplayContext::Expand(slot) => show_expand(ctx, app, slot),
        DisplayContext::Compare(slots) => show_compare(ctx, app, &slots),
    }
}

fn show_expand(ctx: &egui::Context, app: &mut BlindTestApp, slot: usize) {
    let modal = egui::Modal::new(egui::Id::new("expand_modal")).show(ctx, |ui| {
        let mut close = false;
        ui.horizontal(|ui| {
            ui.strong(format!("Photo {}", slot + 1));
            let mut locked = app.engine.lock_flags().global;
            if ui.checkbox(&mut locked, "Zoom all photos together").changed() {
                app.engine.set_global_lock(locked);
            }
            close = close_button(ui);
        });
        ui.add_space(8.0);
        viewport::show(ui, app, slot, ContainerPreset::Expanded, true);
        close
    });

    if modal.inner || modal.should_close() {
        app.close_modal();
    }
}

fn show_compare(ctx: &egui::Context, app: &mut BlindTestApp, slots: &[usize]) {
    let modal = egui::Modal::new(egui::Id::new("compare_modal")).show(ctx, |ui| {
        let mut close = false;
        ui.horizontal(|ui| {
            let mut together = app.engine.lock_flags().compare;
            if ui.checkbox(&mut together, "Move together").changed() {
                app.engine.set_compare_lock(together);
            }
            close = close_button(ui);
        });
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            for &slot in slots {
                viewport::show(ui, app, slot, ContainerPreset::Expanded, true);
            }
        });
        close
    });

    if modal.inner || modal.should_close() {
        app.close_modal();
    }
}

fn close_button(ui: &mut egui::Ui) -> bool {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.button("Close").clicked()
    })
    .inner
}

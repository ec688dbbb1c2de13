use blindtest_core::consts::SLOT_COUNT;
use blindtest_core::geometry::ContainerPreset;
use blindtest_core::viewport::DisplayContext;

use crate::app::BlindTestApp;
use crate::panels::viewport;

const INSTRUCTIONS: &str =
    "select the best and worst in each group, please compare and look closely";

pub fn show(ctx: &egui::Context, app: &mut BlindTestApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(egui::RichText::new(&app.config.title).size(32.0).strong());
            ui.add_space(8.0);
            respondent_fields(ui, app);
            ui.add_space(4.0);
            ui.label(INSTRUCTIONS);
        });
        ui.add_space(16.0);

        group_bar(ui, app);
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            for slot in 0..SLOT_COUNT {
                ui.vertical(|ui| card(ui, app, slot));
                ui.add_space(8.0);
            }
        });
        ui.add_space(8.0);

        let mut equivalent = app.survey.current().equivalent;
        if ui
            .checkbox(&mut equivalent, "The remaining are equivalent")
            .changed()
        {
            app.survey.toggle_equivalent();
        }
        ui.add_space(16.0);

        navigation(ui, app);
    });
}

fn respondent_fields(ui: &mut egui::Ui, app: &mut BlindTestApp) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut app.survey.respondent.name)
                .hint_text("name")
                .desired_width(160.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut app.survey.respondent.country)
                .hint_text("country")
                .desired_width(160.0),
        );
    });
}

fn group_bar(ui: &mut egui::Ui, app: &mut BlindTestApp) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "group: {} || {}/{}",
                app.config.group_label,
                app.survey.group_index() + 1,
                app.survey.total_groups()
            ))
            .size(20.0),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let comparing = matches!(app.engine.display(), DisplayContext::Compare(_));
            let label = if comparing { "Exit Compare" } else { "Compare Selected" };
            if ui.button(label).clicked() {
                toggle_compare(app, comparing);
            }
        });
    });
}

fn toggle_compare(app: &mut BlindTestApp, comparing: bool) {
    if comparing {
        app.close_modal();
        return;
    }
    let selection = app.survey.compare_selection();
    if selection.is_empty() {
        app.ui_state
            .add_log("Tick \"Add to compare\" on at least one photo first".into());
        return;
    }
    let result = app.engine.open_compare(selection);
    app.report(result);
}

fn card(ui: &mut egui::Ui, app: &mut BlindTestApp, slot: usize) {
    ui.horizontal(|ui| {
        if ui.button("Expand").clicked() {
            let result = app.engine.open_expand(slot);
            app.report(result);
        }
        let mut selected = app.survey.is_selected_for_compare(slot);
        if ui.checkbox(&mut selected, "Add to compare").changed() {
            let result = app.survey.toggle_compare(slot);
            app.report(result);
        }
    });

    viewport::show(ui, app, slot, ContainerPreset::Normal, false);

    let current = app.survey.current();
    let mut best = current.best == Some(slot);
    let mut worst = current.worst == Some(slot);
    if ui.checkbox(&mut best, "best").clicked() {
        let result = app.survey.select_best(slot);
        app.report(result);
    }
    if ui.checkbox(&mut worst, "worst").clicked() {
        let result = app.survey.select_worst(slot);
        app.report(result);
    }
}

fn navigation(ui: &mut egui::Ui, app: &mut BlindTestApp) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(app.survey.can_go_back(), egui::Button::new("<"))
            .clicked()
        {
            app.survey.prev_group();
        }
        ui.label(
            egui::RichText::new(format!(
                "{}/{}",
                app.survey.group_index() + 1,
                app.survey.total_groups()
            ))
            .size(20.0),
        );
        if ui
            .add_enabled(app.survey.can_go_forward(), egui::Button::new(">"))
            .clicked()
        {
            app.survey.next_group();
        }
    });
}

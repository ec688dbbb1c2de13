use blindtest_core::consts::{KEYBOARD_PAN_STEP, TRANSFORM_ANIMATION_SECS};
use blindtest_core::geometry::{ContainerPreset, Size};
use blindtest_core::viewport::bounds::displayed_size;
use blindtest_core::viewport::{CursorAffordance, Viewport};

use crate::app::BlindTestApp;
use crate::convert::{to_point, to_rect};

const RESET_BUTTON_SIZE: egui::Vec2 = egui::vec2(84.0, 22.0);

/// Draw `slot` in a card of the given preset. Inside a modal the surface
/// takes wheel, pointer and arrow-key input; in the grid it only displays.
pub fn show(
    ui: &mut egui::Ui,
    app: &mut BlindTestApp,
    slot: usize,
    preset: ContainerPreset,
    modal: bool,
) {
    let size = preset.size(&app.config.layout);
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(size.width as f32, size.height as f32),
        egui::Sense::click_and_drag(),
    );
    let interactive = modal && app.engine.display().shows(slot);
    let reset_rect = egui::Rect::from_min_size(rect.min + egui::vec2(8.0, 8.0), RESET_BUTTON_SIZE);

    if interactive {
        app.layout.place(slot, to_rect(rect));
        track_hover(ui, app, slot, rect);
        handle_zoom(ui, app, slot, rect);
        handle_press(ui, app, slot, rect, reset_rect);
        handle_keys(ui, app, slot);
    }

    paint(ui, app, slot, rect);

    if interactive {
        let zoomed = app.engine.viewport(slot).is_ok_and(|vp| vp.is_zoomed());
        if zoomed && ui.put(reset_rect, egui::Button::new("Reset zoom")).clicked() {
            let result = app.engine.reset(slot);
            app.report(result);
        }
        apply_cursor(ui.ctx(), app, slot);
    }
}

/// Forward window-wide pointer input to the active drag, so moves and
/// releases outside the card still reach it.
pub fn drive_drag(ctx: &egui::Context, app: &mut BlindTestApp) {
    if app.engine.capture().active().is_none() {
        return;
    }
    let (released, pos) = ctx.input(|i| {
        (
            i.pointer.primary_released() || !i.pointer.primary_down(),
            i.pointer.latest_pos(),
        )
    });
    if released {
        app.engine.end_drag();
    } else if let Some(pos) = pos {
        let result = app.engine.update_drag(&app.layout, to_point(pos));
        app.report(result);
    }
}

fn pointer_inside(ui: &egui::Ui, rect: egui::Rect) -> bool {
    ui.input(|i| i.pointer.hover_pos())
        .is_some_and(|p| rect.contains(p))
}

fn track_hover(ui: &egui::Ui, app: &mut BlindTestApp, slot: usize, rect: egui::Rect) {
    let inside = pointer_inside(ui, rect);
    let Some(was_inside) = app.ui_state.pointer_inside.get_mut(slot) else {
        return;
    };
    if inside && !*was_inside {
        app.engine.pointer_enter(slot);
    } else if !inside && *was_inside {
        app.engine.pointer_leave(slot);
    }
    *was_inside = inside;
}

fn handle_zoom(ui: &egui::Ui, app: &mut BlindTestApp, slot: usize, rect: egui::Rect) {
    let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
    if scroll_delta == 0.0 || !pointer_inside(ui, rect) {
        return;
    }
    // egui reports wheel-up as positive; the engine takes wheel-down as positive.
    let result = app.engine.zoom(&app.layout, slot, -scroll_delta as f64);
    app.report(result);
}

fn handle_press(
    ui: &egui::Ui,
    app: &mut BlindTestApp,
    slot: usize,
    rect: egui::Rect,
    reset_rect: egui::Rect,
) {
    let press = ui.input(|i| {
        if i.pointer.primary_pressed() {
            i.pointer.interact_pos()
        } else {
            None
        }
    });
    let Some(pos) = press else {
        return;
    };
    if !rect.contains(pos) || reset_rect.contains(pos) {
        return;
    }
    let result = app.engine.begin_drag(&app.layout, slot, to_point(pos));
    app.report(result);
}

fn handle_keys(ui: &egui::Ui, app: &mut BlindTestApp, slot: usize) {
    if app.engine.hovered() != Some(slot) {
        return;
    }
    let (dx, dy) = ui.input(|i| {
        let mut d = (0.0, 0.0);
        if i.key_pressed(egui::Key::ArrowLeft) {
            d.0 -= KEYBOARD_PAN_STEP;
        }
        if i.key_pressed(egui::Key::ArrowRight) {
            d.0 += KEYBOARD_PAN_STEP;
        }
        if i.key_pressed(egui::Key::ArrowUp) {
            d.1 -= KEYBOARD_PAN_STEP;
        }
        if i.key_pressed(egui::Key::ArrowDown) {
            d.1 += KEYBOARD_PAN_STEP;
        }
        d
    });
    if dx != 0.0 || dy != 0.0 {
        let result = app.engine.pan(&app.layout, slot, dx, dy);
        app.report(result);
    }
}

fn paint(ui: &egui::Ui, app: &BlindTestApp, slot: usize, rect: egui::Rect) {
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::from_gray(238));

    let Some(image) = app.images.get(slot) else {
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Loading...",
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(120),
        );
        return;
    };

    let target = app.engine.viewport(slot).unwrap_or_default();
    let vp = animate(ui.ctx(), slot, target, app.engine.is_dragging(slot));

    let container = Size::new(rect.width() as f64, rect.height() as f64);
    let shown = displayed_size(image.natural_size(), container, vp.scale);
    let shift = vp.screen_shift();
    let img_rect = egui::Rect::from_center_size(
        rect.center() + egui::vec2(shift.x as f32, shift.y as f32),
        egui::vec2(shown.width as f32, shown.height as f32),
    );
    painter.image(
        image.texture.id(),
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

/// Ease towards `target`, or jump straight to it while `slot` is dragged.
fn animate(ctx: &egui::Context, slot: usize, target: Viewport, dragging: bool) -> Viewport {
    let secs = if dragging { 0.0 } else { TRANSFORM_ANIMATION_SECS };
    let value = |name: &str, v: f64| {
        ctx.animate_value_with_time(egui::Id::new(("viewport", slot, name)), v as f32, secs) as f64
    };
    Viewport {
        scale: value("scale", target.scale),
        offset_x: value("x", target.offset_x),
        offset_y: value("y", target.offset_y),
    }
}

fn apply_cursor(ctx: &egui::Context, app: &BlindTestApp, slot: usize) {
    match app.engine.cursor(slot) {
        CursorAffordance::Grab => ctx.set_cursor_icon(egui::CursorIcon::Grab),
        CursorAffordance::Grabbing => ctx.set_cursor_icon(egui::CursorIcon::Grabbing),
        CursorAffordance::Default => {}
    }
}

use std::path::Path;

use blindtest_core::config::LayoutConfig;
use blindtest_core::consts::{MAX_SCALE, MIN_SCALE};
use blindtest_core::geometry::{ContainerPreset, Size};
use blindtest_core::script::{ScriptEvent, Step};
use blindtest_core::viewport::bounds::{displayed_size, max_offset};
use console::Style;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    dim: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            dim: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_image_info(file: &Path, natural: Size, layout: &LayoutConfig, presets: &[ContainerPreset]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.path.apply_to(file.display()));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Natural size"),
        s.value.apply_to(format!("{}x{}", natural.width, natural.height))
    );

    for &preset in presets {
        let container = preset.size(layout);
        let shown = displayed_size(natural, container, MIN_SCALE);
        println!();
        println!(
            "  {} {}",
            s.title.apply_to(preset),
            s.label.apply_to(format!(
                "({}x{}, fits {:.1}x{:.1})",
                container.width, container.height, shown.width, shown.height
            ))
        );
        // Whole scales only.
        let mut scale = MIN_SCALE;
        while scale <= MAX_SCALE {
            let max = max_offset(natural, container, scale);
            println!(
                "    {:<12}{}",
                s.label.apply_to(format!("x{scale}")),
                s.value.apply_to(format!("\u{00b1}{:.2}, \u{00b1}{:.2}", max.x, max.y))
            );
            scale += 1.0;
        }
    }
}

pub fn print_steps(steps: &[Step]) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Replay"));
    println!();

    for (i, step) in steps.iter().enumerate() {
        let drag = match step.dragging {
            Some(slot) => format!("dragging {slot}"),
            None => String::new(),
        };
        println!(
            "  {:>3}  {:<28}{}",
            s.label.apply_to(i),
            describe(&step.event),
            s.dim.apply_to(drag)
        );
        for (slot, vp) in step.viewports.iter().enumerate() {
            if vp.is_identity() {
                continue;
            }
            println!(
                "       {} {}",
                s.label.apply_to(format!("slot {slot}")),
                s.value.apply_to(format!(
                    "scale {:.4}  offset ({:.2}, {:.2})",
                    vp.scale, vp.offset_x, vp.offset_y
                ))
            );
        }
    }
}

fn describe(event: &ScriptEvent) -> String {
    match event {
        ScriptEvent::Expand { slot } => format!("expand {slot}"),
        ScriptEvent::Compare { slots } => format!("compare {slots:?}"),
        ScriptEvent::Close => "close".into(),
        ScriptEvent::GlobalLock { on } => format!("global lock {}", on_off(*on)),
        ScriptEvent::CompareLock { on } => format!("compare lock {}", on_off(*on)),
        ScriptEvent::Zoom { slot, direction } => format!("zoom {slot} ({direction:+})"),
        ScriptEvent::Pan { slot, dx, dy } => format!("pan {slot} by ({dx}, {dy})"),
        ScriptEvent::Reset { slot } => format!("reset {slot}"),
        ScriptEvent::ResetAll => "reset all".into(),
        ScriptEvent::PointerEnter { slot } => format!("enter {slot}"),
        ScriptEvent::PointerDown { slot, x, y } => format!("down {slot} at ({x}, {y})"),
        ScriptEvent::PointerMove { x, y } => format!("move to ({x}, {y})"),
        ScriptEvent::PointerUp => "up".into(),
        ScriptEvent::PointerLeave { slot } => format!("leave {slot}"),
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

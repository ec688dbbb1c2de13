//! Headless replay of UI events against a [`TransformEngine`].
//!
//! Pointer coordinates in a script are relative to the top-left corner of the
//! slot's container, and every container uses the preset size of the current
//! display context.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LayoutConfig;
use crate::consts::SLOT_COUNT;
use crate::error::{BlindTestError, Result};
use crate::geometry::{Size, StaticLayout, Vec2};
use crate::viewport::{DisplayContext, TransformEngine, Viewport};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Natural image size per slot. Missing slots count as not loaded.
    #[serde(default)]
    pub naturals: Vec<Size>,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Expand { slot: usize },
    Compare { slots: Vec<usize> },
    Close,
    GlobalLock { on: bool },
    CompareLock { on: bool },
    Zoom { slot: usize, direction: f64 },
    Pan { slot: usize, dx: f64, dy: f64 },
    Reset { slot: usize },
    ResetAll,
    PointerEnter { slot: usize },
    PointerDown { slot: usize, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave { slot: usize },
}

/// State after one replayed event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Step {
    pub event: ScriptEvent,
    pub viewports: Vec<Viewport>,
    pub dragging: Option<usize>,
}

impl Script {
    pub fn validate(&self) -> Result<()> {
        if self.naturals.len() > SLOT_COUNT {
            return Err(BlindTestError::InvalidScript(format!(
                "{} natural sizes given for {SLOT_COUNT} slots",
                self.naturals.len()
            )));
        }
        self.layout.validate()
    }

    fn layout_for(&self, display: &DisplayContext) -> StaticLayout {
        let mut naturals = self.naturals.clone();
        naturals.resize(SLOT_COUNT, Size::ZERO);
        StaticLayout::uniform(&naturals, display.preset().size(&self.layout))
    }
}

/// Run every event in order and record the transforms after each one.
pub fn replay(script: &Script) -> Result<Vec<Step>> {
    script.validate()?;
    let mut engine = TransformEngine::new();
    let mut steps = Vec::with_capacity(script.events.len());

    for (i, event) in script.events.iter().enumerate() {
        apply(&mut engine, script, event)
            .map_err(|e| BlindTestError::InvalidScript(format!("event {i}: {e}")))?;
        debug!(index = i, ?event, "replayed");
        steps.push(Step {
            event: event.clone(),
            viewports: engine.viewports().to_vec(),
            dragging: engine.dragging_slot(),
        });
    }
    Ok(steps)
}

fn apply(engine: &mut TransformEngine, script: &Script, event: &ScriptEvent) -> Result<()> {
    let layout = script.layout_for(engine.display());
    match *event {
        ScriptEvent::Expand { slot } => engine.open_expand(slot)?,
        ScriptEvent::Compare { ref slots } => engine.open_compare(slots.iter().copied())?,
        ScriptEvent::Close => engine.close_modal(),
        ScriptEvent::GlobalLock { on } => engine.set_global_lock(on),
        ScriptEvent::CompareLock { on } => engine.set_compare_lock(on),
        ScriptEvent::Zoom { slot, direction } => engine.zoom(&layout, slot, direction)?,
        ScriptEvent::Pan { slot, dx, dy } => engine.pan(&layout, slot, dx, dy)?,
        ScriptEvent::Reset { slot } => engine.reset(slot)?,
        ScriptEvent::ResetAll => engine.reset_all(),
        ScriptEvent::PointerEnter { slot } => engine.pointer_enter(slot),
        ScriptEvent::PointerDown { slot, x, y } => {
            engine.begin_drag(&layout, slot, Vec2::new(x, y))?;
        }
        ScriptEvent::PointerMove { x, y } => {
            engine.update_drag(&layout, Vec2::new(x, y))?;
        }
        ScriptEvent::PointerUp => engine.end_drag(),
        ScriptEvent::PointerLeave { slot } => engine.pointer_leave(slot),
    }
    Ok(())
}

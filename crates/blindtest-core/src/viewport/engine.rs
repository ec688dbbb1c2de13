use tracing::{debug, info};

use crate::consts::MIN_SCALE;
use crate::error::Result;
use crate::geometry::{ContainerPreset, Measure, Vec2};

use super::drag::{CursorAffordance, DragEnd, DragSession, NoCapture, PointerCapture};
use super::lock::{LockContext, LockFlags};
use super::store::ViewportStore;
use super::transform::Viewport;
use super::{pan, zoom};

/// Where the viewports are currently displayed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DisplayContext {
    /// Static card grid. Viewports are shown but not interactive.
    #[default]
    Grid,
    /// Single-image expand modal.
    Expand(usize),
    /// Compare modal showing the listed slots side by side.
    Compare(Vec<usize>),
}

impl DisplayContext {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::Grid)
    }

    /// Whether `slot` is visible on an interactive surface.
    pub fn shows(&self, slot: usize) -> bool {
        match self {
            Self::Grid => false,
            Self::Expand(s) => *s == slot,
            Self::Compare(slots) => slots.contains(&slot),
        }
    }

    pub fn preset(&self) -> ContainerPreset {
        match self {
            Self::Grid => ContainerPreset::Normal,
            Self::Expand(_) | Self::Compare(_) => ContainerPreset::Expanded,
        }
    }
}

/// Owns the per-slot transforms and routes every UI command through the
/// zoom, pan and drag controllers.
///
/// After each command the engine restores two invariants: a viewport at
/// scale 1 has zero offset, and a drag never outlives its viewport's zoom.
#[derive(Debug)]
pub struct TransformEngine<C: PointerCapture = NoCapture> {
    store: ViewportStore,
    drag: DragSession<C>,
    flags: LockFlags,
    display: DisplayContext,
    lock: LockContext,
    hovered: Option<usize>,
}

impl Default for TransformEngine<NoCapture> {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformEngine<NoCapture> {
    pub fn new() -> Self {
        Self::with_capture(NoCapture)
    }
}

impl<C: PointerCapture> TransformEngine<C> {
    pub fn with_capture(capture: C) -> Self {
        Self {
            store: ViewportStore::new(),
            drag: DragSession::new(capture),
            flags: LockFlags::default(),
            display: DisplayContext::Grid,
            lock: LockContext::None,
            hovered: None,
        }
    }

    // -----------------------------------------------------------------------
    // Read-back
    // -----------------------------------------------------------------------

    pub fn viewport(&self, slot: usize) -> Result<Viewport> {
        self.store.get(slot)
    }

    pub fn viewports(&self) -> &[Viewport] {
        self.store.as_slice()
    }

    pub fn store(&self) -> &ViewportStore {
        &self.store
    }

    pub fn display(&self) -> &DisplayContext {
        &self.display
    }

    pub fn lock_context(&self) -> LockContext {
        self.lock
    }

    pub fn lock_flags(&self) -> LockFlags {
        self.flags
    }

    pub fn capture(&self) -> &C {
        self.drag.capture()
    }

    pub fn dragging_slot(&self) -> Option<usize> {
        self.drag.slot()
    }

    pub fn is_dragging(&self, slot: usize) -> bool {
        self.drag.is_dragging(slot)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn cursor(&self, slot: usize) -> CursorAffordance {
        let zoomed = self.store.get(slot).is_ok_and(|vp| vp.is_zoomed());
        if !zoomed || !self.display.shows(slot) {
            CursorAffordance::Default
        } else if self.drag.is_dragging(slot) {
            CursorAffordance::Grabbing
        } else if self.hovered == Some(slot) {
            CursorAffordance::Grab
        } else {
            CursorAffordance::Default
        }
    }

    // -----------------------------------------------------------------------
    // Display lifecycle
    // -----------------------------------------------------------------------

    /// Open the expand modal on `slot`, starting it from the identity transform.
    pub fn open_expand(&mut self, slot: usize) -> Result<()> {
        self.store.check(slot)?;
        self.drag.finish(DragEnd::ContextChange);
        self.store.reset_one(slot)?;
        self.set_display(DisplayContext::Expand(slot));
        Ok(())
    }

    /// Open the compare modal on `slots` (deduplicated, in slot order).
    pub fn open_compare(&mut self, slots: impl IntoIterator<Item = usize>) -> Result<()> {
        let mut slots: Vec<usize> = slots.into_iter().collect();
        for &slot in &slots {
            self.store.check(slot)?;
        }
        slots.sort_unstable();
        slots.dedup();
        self.drag.finish(DragEnd::ContextChange);
        self.set_display(DisplayContext::Compare(slots));
        Ok(())
    }

    /// Close whichever modal is open and reset every viewport.
    pub fn close_modal(&mut self) {
        self.drag.finish(DragEnd::ContextChange);
        self.store.reset_all();
        self.hovered = None;
        self.set_display(DisplayContext::Grid);
    }

    pub fn set_global_lock(&mut self, on: bool) {
        self.flags.global = on;
        self.lock = self.flags.resolve(&self.display);
    }

    pub fn set_compare_lock(&mut self, on: bool) {
        self.flags.compare = on;
        self.lock = self.flags.resolve(&self.display);
    }

    fn set_display(&mut self, ctx: DisplayContext) {
        self.lock = self.flags.resolve(&ctx);
        info!(context = ?ctx, lock = %self.lock, "display context changed");
        self.display = ctx;
    }

    // -----------------------------------------------------------------------
    // Commands
    // -----------------------------------------------------------------------

    /// One wheel notch on `slot`. `direction` is the signed wheel delta:
    /// positive shrinks, negative magnifies, zero or non-finite does nothing.
    /// Slots not shown in a modal ignore the wheel.
    pub fn zoom(&mut self, geometry: &dyn Measure, slot: usize, direction: f64) -> Result<()> {
        self.store.check(slot)?;
        if !self.display.shows(slot) {
            debug!(slot, "ignoring zoom outside an interactive surface");
            return Ok(());
        }
        let Some(direction) = zoom::ZoomDirection::from_delta(direction) else {
            debug!(slot, direction, "ignoring zoom without direction");
            return Ok(());
        };
        zoom::zoom(&mut self.store, geometry, slot, direction, self.lock)?;
        self.enforce_invariants();
        Ok(())
    }

    pub fn pan(&mut self, geometry: &dyn Measure, slot: usize, dx: f64, dy: f64) -> Result<()> {
        self.store.check(slot)?;
        if !self.display.shows(slot) {
            debug!(slot, "ignoring pan outside an interactive surface");
            return Ok(());
        }
        pan::pan(&mut self.store, geometry, slot, Vec2::new(dx, dy), self.lock)?;
        self.enforce_invariants();
        Ok(())
    }

    /// The reset button: all slots under an active lock, otherwise `slot`.
    pub fn reset(&mut self, slot: usize) -> Result<()> {
        if self.lock.is_active() {
            self.store.check(slot)?;
            self.store.reset_all();
        } else {
            self.store.reset_one(slot)?;
        }
        self.enforce_invariants();
        Ok(())
    }

    pub fn reset_one(&mut self, slot: usize) -> Result<()> {
        self.store.reset_one(slot)?;
        self.enforce_invariants();
        Ok(())
    }

    pub fn reset_all(&mut self) {
        self.store.reset_all();
        self.enforce_invariants();
    }

    /// Pointer-down at screen position `pointer` over `slot`.
    pub fn begin_drag(&mut self, geometry: &dyn Measure, slot: usize, pointer: Vec2) -> Result<bool> {
        self.store.check(slot)?;
        let rel = geometry.measure(slot).container.relative_to_center(pointer);
        let interactive = self.display.is_interactive() && self.display.shows(slot);
        self.drag.begin(&self.store, slot, rel, interactive)
    }

    /// Pointer-move at screen position `pointer`. No effect while idle.
    pub fn update_drag(&mut self, geometry: &dyn Measure, pointer: Vec2) -> Result<bool> {
        let Some(slot) = self.drag.slot() else {
            return Ok(false);
        };
        let rel = geometry.measure(slot).container.relative_to_center(pointer);
        let moved = self.drag.update(&mut self.store, geometry, rel, self.lock)?;
        self.enforce_invariants();
        Ok(moved)
    }

    /// Pointer-up anywhere.
    pub fn end_drag(&mut self) {
        self.drag.finish(DragEnd::PointerUp);
    }

    pub fn pointer_enter(&mut self, slot: usize) {
        self.hovered = Some(slot);
    }

    /// Pointer left `slot`'s surface; ends a drag on that slot.
    pub fn pointer_leave(&mut self, slot: usize) {
        if self.hovered == Some(slot) {
            self.hovered = None;
        }
        if self.drag.is_dragging(slot) {
            self.drag.finish(DragEnd::PointerLeave);
        }
    }

    fn enforce_invariants(&mut self) {
        self.store.update_all(|_, vp| {
            if vp.scale == MIN_SCALE {
                Viewport::IDENTITY
            } else {
                vp
            }
        });
        if let Some(slot) = self.drag.slot() {
            if self.store.get(slot).is_ok_and(|vp| !vp.is_zoomed()) {
                self.drag.finish(DragEnd::ScaleReset);
            }
        }
    }
}

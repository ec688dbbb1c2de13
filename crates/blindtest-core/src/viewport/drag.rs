use tracing::{debug, info};

use crate::error::Result;
use crate::geometry::{Measure, Vec2};

use super::bounds::clamp_offset_for;
use super::lock::LockContext;
use super::store::ViewportStore;

/// Host-side pointer tracking that must be held exactly as long as a drag.
///
/// A GUI maps this to whatever routes pointer-move and pointer-up events to
/// the session while the pointer is away from the card (window listeners,
/// pointer capture, a global input poll).
pub trait PointerCapture {
    fn acquire(&mut self, slot: usize);
    fn release(&mut self, slot: usize);
}

/// Capture for hosts that need no listener bookkeeping.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn acquire(&mut self, _slot: usize) {}
    fn release(&mut self, _slot: usize) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        slot: usize,
        /// Pointer position relative to the viewport centre minus the
        /// on-screen shift at grab time. Constant for the whole session so the
        /// point under the cursor does not jump.
        grab: Vec2,
    },
}

/// Why a drag session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEnd {
    PointerUp,
    PointerLeave,
    /// The dragged viewport returned to scale 1.
    ScaleReset,
    /// The display context changed (modal opened or closed).
    ContextChange,
    /// A new session replaced this one.
    Superseded,
    Teardown,
}

/// Cursor shown over a viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorAffordance {
    #[default]
    Default,
    Grab,
    Grabbing,
}

impl std::fmt::Display for CursorAffordance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Grab => write!(f, "grab"),
            Self::Grabbing => write!(f, "grabbing"),
        }
    }
}

/// Pointer-driven pan state machine: `Idle` ⇄ `Dragging(slot)`.
///
/// The session owns the host's [`PointerCapture`]. Capture is acquired on
/// entry to `Dragging` and released from [`DragSession::finish`] only, which
/// every exit path (including drop) goes through.
#[derive(Debug, Default)]
pub struct DragSession<C: PointerCapture = NoCapture> {
    state: DragState,
    capture: C,
}

impl<C: PointerCapture> DragSession<C> {
    pub fn new(capture: C) -> Self {
        Self {
            state: DragState::Idle,
            capture,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Slot being dragged, if any.
    pub fn slot(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { slot, .. } => Some(slot),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self, slot: usize) -> bool {
        self.slot() == Some(slot)
    }

    /// Pointer-down over `slot`. Starts a session when the slot is magnified
    /// and `interactive` is set; returns whether a session started.
    pub fn begin(
        &mut self,
        store: &ViewportStore,
        slot: usize,
        pointer_rel: Vec2,
        interactive: bool,
    ) -> Result<bool> {
        let vp = store.get(slot)?;
        if !interactive || !vp.is_zoomed() || !pointer_rel.is_finite() {
            return Ok(false);
        }
        self.finish(DragEnd::Superseded);

        let grab = pointer_rel - vp.screen_shift();
        self.state = DragState::Dragging { slot, grab };
        self.capture.acquire(slot);
        info!(slot, scale = vp.scale, "drag started");
        Ok(true)
    }

    /// Pointer-move. Writes the new clamped offset and returns whether
    /// anything changed; a move while idle is a no-op.
    ///
    /// Under a lock the same absolute offset goes to every viewport, unlike
    /// locked pan which shifts each viewport relatively. The offset is clamped
    /// once against the dragged viewport's geometry, and the others keep
    /// their own scale.
    pub fn update(
        &mut self,
        store: &mut ViewportStore,
        geometry: &dyn Measure,
        pointer_rel: Vec2,
        lock: LockContext,
    ) -> Result<bool> {
        let DragState::Dragging { slot, grab } = self.state else {
            return Ok(false);
        };
        if !pointer_rel.is_finite() {
            debug!(slot, ?pointer_rel, "ignoring non-finite pointer position");
            return Ok(false);
        }

        let vp = store.get(slot)?;
        let raw = (pointer_rel - grab) / vp.scale;
        let offset = clamp_offset_for(&geometry.measure(slot), raw, vp.scale);

        if lock.is_active() {
            store.update_all(|_, other| other.with_offset(offset));
        } else {
            store.set(slot, vp.with_offset(offset))?;
        }
        Ok(true)
    }

    /// Return to `Idle`, releasing capture. Idempotent.
    pub fn finish(&mut self, reason: DragEnd) {
        if let DragState::Dragging { slot, .. } = self.state {
            self.state = DragState::Idle;
            self.capture.release(slot);
            info!(slot, ?reason, "drag ended");
        }
    }
}

impl<C: PointerCapture> Drop for DragSession<C> {
    fn drop(&mut self) {
        self.finish(DragEnd::Teardown);
    }
}

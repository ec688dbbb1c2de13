use blindtest_core::viewport::PointerCapture;
use tracing::debug;

/// Window-wide pointer routing for the active drag.
///
/// egui has no listeners to register, so capture is a flag the viewport panel
/// reads every frame: while it names a slot, pointer moves and releases
/// anywhere in the window are forwarded to the engine.
#[derive(Debug, Default)]
pub struct WindowCapture {
    active: Option<usize>,
}

impl WindowCapture {
    pub fn active(&self) -> Option<usize> {
        self.active
    }
}

impl PointerCapture for WindowCapture {
    fn acquire(&mut self, slot: usize) {
        debug!(slot, "pointer captured");
        self.active = Some(slot);
    }

    fn release(&mut self, slot: usize) {
        if self.active == Some(slot) {
            self.active = None;
        }
        debug!(slot, "pointer released");
    }
}

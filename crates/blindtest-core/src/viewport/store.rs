use crate::consts::SLOT_COUNT;
use crate::error::{BlindTestError, Result};

use super::transform::Viewport;

/// One [`Viewport`] per image slot.
///
/// Every write replaces a whole value. No clamping happens here; callers
/// are responsible for passing legal transforms.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportStore {
    slots: [Viewport; SLOT_COUNT],
}

impl Default for ViewportStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportStore {
    pub fn new() -> Self {
        Self {
            slots: [Viewport::IDENTITY; SLOT_COUNT],
        }
    }

    pub fn len(&self) -> usize {
        SLOT_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn check(&self, slot: usize) -> Result<()> {
        if slot < SLOT_COUNT {
            Ok(())
        } else {
            Err(BlindTestError::SlotOutOfRange {
                slot,
                count: SLOT_COUNT,
            })
        }
    }

    pub fn get(&self, slot: usize) -> Result<Viewport> {
        self.check(slot)?;
        Ok(self.slots[slot])
    }

    pub fn set(&mut self, slot: usize, viewport: Viewport) -> Result<()> {
        self.check(slot)?;
        self.slots[slot] = viewport;
        Ok(())
    }

    pub fn set_all(&mut self, viewport: Viewport) {
        self.slots = [viewport; SLOT_COUNT];
    }

    /// Replace every slot with `f(slot, current)`.
    pub fn update_all(&mut self, mut f: impl FnMut(usize, Viewport) -> Viewport) {
        for (slot, vp) in self.slots.iter_mut().enumerate() {
            *vp = f(slot, *vp);
        }
    }

    pub fn reset_one(&mut self, slot: usize) -> Result<()> {
        self.set(slot, Viewport::IDENTITY)
    }

    pub fn reset_all(&mut self) {
        self.set_all(Viewport::IDENTITY);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Viewport> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[Viewport] {
        &self.slots
    }
}

use blindtest_core::consts::SLOT_COUNT;
use blindtest_core::geometry::{Measure, Measurement, Rect, Size};

/// Geometry of the cards as laid out this frame.
///
/// Slots not drawn on an interactive surface keep the context's preset size
/// anchored at the origin, which is all clamping needs from them.
#[derive(Debug, Default)]
pub struct CardLayout {
    naturals: [Size; SLOT_COUNT],
    containers: [Rect; SLOT_COUNT],
}

impl CardLayout {
    pub fn set_natural(&mut self, slot: usize, natural: Size) {
        if let Some(n) = self.naturals.get_mut(slot) {
            *n = natural;
        }
    }

    pub fn clear_naturals(&mut self) {
        self.naturals = [Size::ZERO; SLOT_COUNT];
    }

    pub fn begin_frame(&mut self, container: Size) {
        self.containers = [Rect::from_size(container); SLOT_COUNT];
    }

    pub fn place(&mut self, slot: usize, rect: Rect) {
        if let Some(c) = self.containers.get_mut(slot) {
            *c = rect;
        }
    }
}

impl Measure for CardLayout {
    fn measure(&self, slot: usize) -> Measurement {
        match (self.naturals.get(slot), self.containers.get(slot)) {
            (Some(&natural), Some(&container)) => Measurement { natural, container },
            _ => Measurement::default(),
        }
    }
}

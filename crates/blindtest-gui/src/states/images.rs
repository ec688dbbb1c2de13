use blindtest_core::consts::SLOT_COUNT;
use blindtest_core::geometry::Size;

pub struct SlotImage {
    pub texture: egui::TextureHandle,
    /// Pixel size of the file, before any texture downscaling.
    pub natural: [u32; 2],
}

impl SlotImage {
    pub fn natural_size(&self) -> Size {
        Size::new(self.natural[0] as f64, self.natural[1] as f64)
    }
}

/// Decoded images per slot for the current config.
#[derive(Default)]
pub struct ImagesState {
    pub slots: [Option<SlotImage>; SLOT_COUNT],
    /// Bumped on every reload; results tagged with an older value are stale.
    pub generation: u64,
}

impl ImagesState {
    pub fn get(&self, slot: usize) -> Option<&SlotImage> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn loaded(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Forget every image and start a new generation.
    pub fn clear(&mut self) -> u64 {
        self.slots = Default::default();
        self.generation += 1;
        self.generation
    }
}

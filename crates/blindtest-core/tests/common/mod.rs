#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use blindtest_core::consts::{MAX_SCALE, MIN_SCALE, SLOT_COUNT};
use blindtest_core::geometry::{Measure, Size, StaticLayout};
use blindtest_core::viewport::bounds::max_offset_for;
use blindtest_core::viewport::{PointerCapture, TransformEngine};

/// Small tolerance for offsets compared against recomputed bounds.
pub const TOL: f64 = 1e-9;

/// Four identical square images in square containers of side `container`.
///
/// With `natural == container` the contain ratio is 1 and the max offset at
/// scale `s` is `container * (s - 1) / (2 s)` on both axes.
pub fn square_layout(natural: f64, container: f64) -> StaticLayout {
    StaticLayout::uniform(
        &[Size::new(natural, natural); SLOT_COUNT],
        Size::new(container, container),
    )
}

/// The expanded preset with a landscape photo in every slot.
pub fn photo_layout() -> StaticLayout {
    StaticLayout::uniform(
        &[Size::new(4000.0, 3000.0); SLOT_COUNT],
        Size::new(350.0, 500.0),
    )
}

/// The expanded preset with landscape and portrait photos alternating, so
/// each slot has different clamp bounds at the same scale.
pub fn mixed_layout() -> StaticLayout {
    let landscape = Size::new(4000.0, 3000.0);
    let portrait = Size::new(3000.0, 4000.0);
    StaticLayout::uniform(
        &[landscape, portrait, landscape, portrait],
        Size::new(350.0, 500.0),
    )
}

/// Panics if any viewport breaks the scale range, the identity-at-scale-1
/// rule, or its clamp bounds.
pub fn assert_invariants<C: PointerCapture>(engine: &TransformEngine<C>, geometry: &dyn Measure) {
    for (slot, vp) in engine.viewports().iter().enumerate() {
        assert!(
            (MIN_SCALE..=MAX_SCALE).contains(&vp.scale),
            "slot {slot}: scale {} out of range",
            vp.scale
        );
        if vp.scale == MIN_SCALE {
            assert_eq!((vp.offset_x, vp.offset_y), (0.0, 0.0), "slot {slot}: offset at scale 1");
        }
        let max = max_offset_for(&geometry.measure(slot), vp.scale);
        assert!(vp.offset_x.abs() <= max.x + TOL, "slot {slot}: x {} > {}", vp.offset_x, max.x);
        assert!(vp.offset_y.abs() <= max.y + TOL, "slot {slot}: y {} > {}", vp.offset_y, max.y);
    }
}

/// Like [`assert_invariants`], but for runs that include locked drags.
///
/// A locked drag writes one offset clamped by the dragged slot's geometry,
/// so the other slots are only bounded by the widest range any slot can
/// reach at max zoom.
pub fn assert_locked_invariants<C: PointerCapture>(
    engine: &TransformEngine<C>,
    geometry: &dyn Measure,
) {
    let (mut reach_x, mut reach_y) = (0.0_f64, 0.0_f64);
    for slot in 0..SLOT_COUNT {
        let max = max_offset_for(&geometry.measure(slot), MAX_SCALE);
        reach_x = reach_x.max(max.x);
        reach_y = reach_y.max(max.y);
    }
    for (slot, vp) in engine.viewports().iter().enumerate() {
        assert!(
            (MIN_SCALE..=MAX_SCALE).contains(&vp.scale),
            "slot {slot}: scale {} out of range",
            vp.scale
        );
        if vp.scale == MIN_SCALE {
            assert_eq!((vp.offset_x, vp.offset_y), (0.0, 0.0), "slot {slot}: offset at scale 1");
        }
        assert!(vp.offset_x.abs() <= reach_x + TOL, "slot {slot}: x {} > {reach_x}", vp.offset_x);
        assert!(vp.offset_y.abs() <= reach_y + TOL, "slot {slot}: y {} > {reach_y}", vp.offset_y);
    }
}

/// Records acquire/release calls so tests can check listener lifetimes.
#[derive(Clone, Debug, Default)]
pub struct RecordingCapture {
    pub log: Rc<RefCell<Vec<String>>>,
}

impl RecordingCapture {
    pub fn entries(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

impl PointerCapture for RecordingCapture {
    fn acquire(&mut self, slot: usize) {
        self.log.borrow_mut().push(format!("acquire {slot}"));
    }

    fn release(&mut self, slot: usize) {
        self.log.borrow_mut().push(format!("release {slot}"));
    }
}

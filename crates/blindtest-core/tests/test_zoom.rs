mod common;

use approx::assert_relative_eq;

use blindtest_core::consts::{MAX_SCALE, MIN_SCALE, SLOT_COUNT, ZOOM_STEP};
use blindtest_core::viewport::zoom::{self, ZoomDirection};
use blindtest_core::viewport::{LockContext, TransformEngine, Viewport, ViewportStore};

use common::{assert_invariants, photo_layout, square_layout};

#[test]
fn test_scroll_away_magnifies_by_step() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    engine.open_expand(0).unwrap();

    engine.zoom(&layout, 0, -1.0).unwrap();
    assert_relative_eq!(engine.viewport(0).unwrap().scale, 1.1, epsilon = 1e-9);
}

#[test]
fn test_repeated_zoom_in_saturates_at_max() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    engine.open_expand(0).unwrap();

    let mut previous = MIN_SCALE;
    for _ in 0..40 {
        engine.zoom(&layout, 0, -1.0).unwrap();
        let scale = engine.viewport(0).unwrap().scale;
        assert!(scale >= previous);
        assert!(scale <= MAX_SCALE);
        previous = scale;
        assert_invariants(&engine, &layout);
    }
    assert_eq!(previous, MAX_SCALE);
}

#[test]
fn test_zoom_out_at_one_stays_at_one() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    engine.open_expand(1).unwrap();
    for _ in 0..5 {
        engine.zoom(&layout, 1, 120.0).unwrap();
    }
    assert!(engine.viewport(1).unwrap().is_identity());
}

#[test]
fn test_zoom_out_back_to_one_clears_offset() {
    let layout = square_layout(100.0, 100.0);
    let mut engine = TransformEngine::new();
    engine.open_expand(0).unwrap();

    for _ in 0..3 {
        engine.zoom(&layout, 0, -1.0).unwrap();
    }
    engine.pan(&layout, 0, 5.0, -5.0).unwrap();
    assert_ne!(engine.viewport(0).unwrap().offset_x, 0.0);

    for _ in 0..3 {
        engine.zoom(&layout, 0, 1.0).unwrap();
        assert_invariants(&engine, &layout);
    }
    assert!(engine.viewport(0).unwrap().is_identity());
}

#[test]
fn test_zoom_without_lock_targets_one_slot() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    engine.open_compare([0, 1, 2]).unwrap();

    engine.zoom(&layout, 1, -1.0).unwrap();
    assert_relative_eq!(engine.viewport(1).unwrap().scale, ZOOM_STEP, epsilon = 1e-9);
    for slot in [0, 2, 3] {
        assert!(engine.viewport(slot).unwrap().is_identity());
    }
}

#[test]
fn test_locked_zoom_broadcasts_scale_and_keeps_offsets() {
    // Container 100, natural 100: max offset at scale s is 50 * (1 - 1/s).
    let layout = square_layout(100.0, 100.0);
    let mut store = ViewportStore::new();
    let offsets = [(10.0, -5.0), (0.0, 0.0), (-20.0, 15.0), (5.0, 5.0)];
    for (slot, &(x, y)) in offsets.iter().enumerate() {
        store
            .set(slot, Viewport { scale: 2.0, offset_x: x, offset_y: y })
            .unwrap();
    }

    let scale = zoom::zoom(&mut store, &layout, 2, ZoomDirection::Out, LockContext::Compare).unwrap();

    assert_relative_eq!(scale, 2.0 / 1.1, epsilon = 1e-9);
    for (slot, &(x, y)) in offsets.iter().enumerate() {
        let vp = store.get(slot).unwrap();
        assert_relative_eq!(vp.scale, 2.0 / 1.1, epsilon = 1e-9);
        assert_eq!((vp.offset_x, vp.offset_y), (x, y));
    }
}

#[test]
fn test_locked_zoom_scale_comes_from_target() {
    let layout = photo_layout();
    let mut store = ViewportStore::new();
    store.set(0, Viewport::IDENTITY.with_scale(3.0)).unwrap();
    store.set(3, Viewport::IDENTITY.with_scale(1.5)).unwrap();

    zoom::zoom(&mut store, &layout, 3, ZoomDirection::In, LockContext::Global).unwrap();

    for slot in 0..SLOT_COUNT {
        assert_relative_eq!(store.get(slot).unwrap().scale, 1.5 * 1.1, epsilon = 1e-9);
    }
}

#[test]
fn test_zoom_out_reclamps_offset() {
    let layout = square_layout(100.0, 100.0);
    let mut store = ViewportStore::new();
    // At scale 4 the bound is 37.5; at 4/1.1 it shrinks to ~36.25.
    store
        .set(0, Viewport { scale: 4.0, offset_x: 37.5, offset_y: -37.5 })
        .unwrap();

    let scale = zoom::zoom(&mut store, &layout, 0, ZoomDirection::Out, LockContext::None).unwrap();

    let bound = 50.0 * (1.0 - 1.0 / scale);
    let vp = store.get(0).unwrap();
    assert_relative_eq!(vp.offset_x, bound, epsilon = 1e-9);
    assert_relative_eq!(vp.offset_y, -bound, epsilon = 1e-9);
}

#[test]
fn test_locked_engine_zoom_reports_identical_scales() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    engine.set_global_lock(true);
    engine.open_expand(2).unwrap();

    for direction in [-1.0, -1.0, -1.0, 1.0, -1.0] {
        engine.zoom(&layout, 2, direction).unwrap();
        let first = engine.viewport(0).unwrap().scale;
        assert!(engine.viewports().iter().all(|vp| vp.scale == first));
        assert_invariants(&engine, &layout);
    }
}

#[test]
fn test_zoom_ignores_missing_direction() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    engine.open_expand(0).unwrap();

    engine.zoom(&layout, 0, 0.0).unwrap();
    engine.zoom(&layout, 0, f64::NAN).unwrap();
    assert!(engine.viewport(0).unwrap().is_identity());
}

#[test]
fn test_zoom_out_of_range_fails_fast() {
    let layout = photo_layout();
    let mut engine = TransformEngine::new();
    assert!(engine.zoom(&layout, 4, -1.0).is_err());
    assert!(engine.viewports().iter().all(Viewport::is_identity));
}

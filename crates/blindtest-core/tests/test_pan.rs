mod common;

use approx::assert_relative_eq;

use blindtest_core::geometry::{Size, StaticLayout, Vec2};
use blindtest_core::viewport::pan::pan;
use blindtest_core::viewport::{LockContext, TransformEngine, Viewport, ViewportStore};

use common::{assert_invariants, square_layout};

fn at_scale(scale: f64, x: f64, y: f64) -> Viewport {
    Viewport { scale, offset_x: x, offset_y: y }
}

#[test]
fn test_pan_adds_delta() {
    let layout = square_layout(100.0, 100.0);
    let mut store = ViewportStore::new();
    store.set(0, at_scale(4.0, 1.0, 2.0)).unwrap();

    pan(&mut store, &layout, 0, Vec2::new(3.0, -4.0), LockContext::None).unwrap();

    let vp = store.get(0).unwrap();
    assert_eq!((vp.offset_x, vp.offset_y), (4.0, -2.0));
    assert_eq!(vp.scale, 4.0);
}

#[test]
fn test_pan_clamps_to_bounds() {
    // Bound at scale 2 is 25 px.
    let layout = square_layout(100.0, 100.0);
    let mut store = ViewportStore::new();
    store.set(1, at_scale(2.0, 0.0, 0.0)).unwrap();

    pan(&mut store, &layout, 1, Vec2::new(500.0, -500.0), LockContext::None).unwrap();

    let vp = store.get(1).unwrap();
    assert_relative_eq!(vp.offset_x, 25.0);
    assert_relative_eq!(vp.offset_y, -25.0);
}

#[test]
fn test_pan_on_unloaded_image_stays_centered() {
    let layout = StaticLayout::uniform(&[Size::ZERO; 4], Size::new(350.0, 500.0));
    let mut engine = TransformEngine::new();
    engine.open_expand(0).unwrap();
    for _ in 0..10 {
        engine.zoom(&layout, 0, -1.0).unwrap();
    }

    for (dx, dy) in [(10.0, 10.0), (-300.0, 42.0), (1e9, -1e9)] {
        engine.pan(&layout, 0, dx, dy).unwrap();
        let vp = engine.viewport(0).unwrap();
        assert_eq!((vp.offset_x, vp.offset_y), (0.0, 0.0));
    }
}

#[test]
fn test_locked_pan_is_relative_per_viewport() {
    let layout = square_layout(100.0, 100.0);
    let mut store = ViewportStore::new();
    store.set(0, at_scale(4.0, 10.0, 0.0)).unwrap();
    store.set(1, at_scale(4.0, -10.0, 5.0)).unwrap();
    store.set(2, at_scale(4.0, 0.0, 0.0)).unwrap();
    store.set(3, at_scale(2.0, 20.0, 0.0)).unwrap();

    pan(&mut store, &layout, 0, Vec2::new(5.0, 5.0), LockContext::Compare).unwrap();

    assert_eq!(store.get(0).unwrap().offset(), Vec2::new(15.0, 5.0));
    assert_eq!(store.get(1).unwrap().offset(), Vec2::new(-5.0, 10.0));
    assert_eq!(store.get(2).unwrap().offset(), Vec2::new(5.0, 5.0));
    // Slot 3 is at scale 2 and clamps to its own 25 px bound.
    let vp3 = store.get(3).unwrap();
    assert_relative_eq!(vp3.offset_x, 25.0);
    assert_relative_eq!(vp3.offset_y, 5.0);
}

#[test]
fn test_pan_ignores_non_finite_delta() {
    let layout = square_layout(100.0, 100.0);
    let mut store = ViewportStore::new();
    store.set(0, at_scale(3.0, 4.0, 4.0)).unwrap();

    pan(&mut store, &layout, 0, Vec2::new(f64::NAN, 1.0), LockContext::None).unwrap();
    pan(&mut store, &layout, 0, Vec2::new(1.0, f64::INFINITY), LockContext::Global).unwrap();

    assert_eq!(store.get(0).unwrap(), at_scale(3.0, 4.0, 4.0));
}

#[test]
fn test_pan_at_scale_one_keeps_invariant() {
    let layout = square_layout(100.0, 100.0);
    let mut engine = TransformEngine::new();
    engine.open_expand(3).unwrap();
    engine.pan(&layout, 3, 30.0, 30.0).unwrap();
    assert!(engine.viewport(3).unwrap().is_identity());
    assert_invariants(&engine, &layout);
}

#[test]
fn test_pan_out_of_range_fails_fast() {
    let layout = square_layout(100.0, 100.0);
    let mut engine = TransformEngine::new();
    assert!(engine.pan(&layout, 8, 1.0, 1.0).is_err());
}

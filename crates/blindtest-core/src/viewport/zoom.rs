use tracing::debug;

use crate::consts::{MAX_SCALE, MIN_SCALE, SCALE_SNAP_EPSILON, ZOOM_STEP};
use crate::error::Result;
use crate::geometry::Measure;

use super::bounds::clamp_offset_for;
use super::lock::LockContext;
use super::store::ViewportStore;
use super::transform::Viewport;

/// Discrete zoom signal derived from a wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify by [`ZOOM_STEP`] (negative wheel delta, scrolling away).
    In,
    /// Shrink by `1 / ZOOM_STEP` (positive wheel delta, scrolling toward).
    Out,
}

impl ZoomDirection {
    /// Map a signed wheel delta to a direction.
    ///
    /// A positive delta shrinks. Zero and non-finite deltas carry no signal.
    pub fn from_delta(delta: f64) -> Option<Self> {
        if !delta.is_finite() || delta == 0.0 {
            return None;
        }
        Some(if delta > 0.0 { Self::Out } else { Self::In })
    }

    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_STEP,
            Self::Out => 1.0 / ZOOM_STEP,
        }
    }
}

/// Next scale after one zoom step, clamped to `[MIN_SCALE, MAX_SCALE]`.
pub fn next_scale(current: f64, direction: ZoomDirection) -> f64 {
    let scale = (current * direction.factor()).clamp(MIN_SCALE, MAX_SCALE);
    if (scale - MIN_SCALE).abs() < SCALE_SNAP_EPSILON {
        MIN_SCALE
    } else {
        scale
    }
}

/// Apply one zoom step to `slot`, or to every slot under an active lock.
///
/// Under a lock every viewport receives the scale computed from the targeted
/// slot and keeps its own offset. Offsets are re-clamped against the bounds
/// at the new scale so a zoom-out never leaves an image dragged past its edge.
/// Returns the new scale.
pub fn zoom(
    store: &mut ViewportStore,
    geometry: &dyn Measure,
    slot: usize,
    direction: ZoomDirection,
    lock: LockContext,
) -> Result<f64> {
    let current = store.get(slot)?;
    let scale = next_scale(current.scale, direction);
    debug!(slot, from = current.scale, to = scale, ?lock, "zoom");

    let rescale = |slot: usize, vp: Viewport| {
        let m = geometry.measure(slot);
        let offset = clamp_offset_for(&m, vp.offset(), scale);
        vp.with_scale(scale).with_offset(offset)
    };

    if lock.is_active() {
        store.update_all(rescale);
    } else {
        store.set(slot, rescale(slot, current))?;
    }
    Ok(scale)
}

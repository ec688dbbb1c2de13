use tracing::debug;

use crate::error::Result;
use crate::geometry::{Measure, Vec2};

use super::bounds::clamp_offset_for;
use super::lock::LockContext;
use super::store::ViewportStore;

/// Shift `slot` by `delta`, or every slot by the same delta under a lock.
///
/// Locked pan is relative: each viewport moves from its own offset and is
/// clamped with its own geometry, so offsets are not forced equal. A
/// non-finite delta is ignored.
pub fn pan(
    store: &mut ViewportStore,
    geometry: &dyn Measure,
    slot: usize,
    delta: Vec2,
    lock: LockContext,
) -> Result<()> {
    store.check(slot)?;
    if !delta.is_finite() {
        debug!(slot, ?delta, "ignoring non-finite pan delta");
        return Ok(());
    }

    if lock.is_active() {
        store.update_all(|i, vp| {
            let m = geometry.measure(i);
            vp.with_offset(clamp_offset_for(&m, vp.offset() + delta, vp.scale))
        });
    } else {
        let vp = store.get(slot)?;
        let m = geometry.measure(slot);
        store.set(
            slot,
            vp.with_offset(clamp_offset_for(&m, vp.offset() + delta, vp.scale)),
        )?;
    }
    Ok(())
}

use crate::geometry::{Measurement, Size, Vec2};

/// Ratio that fits `natural` entirely inside `container`, preserving aspect.
///
/// `None` when the natural size is unknown (image not loaded yet).
pub fn contain_ratio(natural: Size, container: Size) -> Option<f64> {
    if natural.is_empty() {
        return None;
    }
    Some((container.width / natural.width).min(container.height / natural.height))
}

/// On-screen size of the image at `scale`, or zero without a natural size.
pub fn displayed_size(natural: Size, container: Size, scale: f64) -> Size {
    match contain_ratio(natural, container) {
        Some(r) => Size::new(natural.width * r * scale, natural.height * r * scale),
        None => Size::ZERO,
    }
}

/// Largest legal pan offset per axis, in pre-scale units.
pub fn max_offset(natural: Size, container: Size, scale: f64) -> Vec2 {
    if !scale.is_finite() || scale <= 0.0 || contain_ratio(natural, container).is_none() {
        return Vec2::ZERO;
    }
    let shown = displayed_size(natural, container, scale);
    Vec2::new(
        ((shown.width - container.width) / 2.0 / scale).max(0.0),
        ((shown.height - container.height) / 2.0 / scale).max(0.0),
    )
}

/// Clamp `offset` per axis into `[-max, +max]`.
pub fn clamp_offset(offset: Vec2, natural: Size, container: Size, scale: f64) -> Vec2 {
    let max = max_offset(natural, container, scale);
    Vec2::new(
        offset.x.clamp(-max.x, max.x),
        offset.y.clamp(-max.y, max.y),
    )
}

/// [`max_offset`] for a measured slot.
pub fn max_offset_for(m: &Measurement, scale: f64) -> Vec2 {
    max_offset(m.natural, m.container.size, scale)
}

/// [`clamp_offset`] for a measured slot.
pub fn clamp_offset_for(m: &Measurement, offset: Vec2, scale: f64) -> Vec2 {
    clamp_offset(offset, m.natural, m.container.size, scale)
}

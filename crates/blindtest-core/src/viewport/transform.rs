use serde::{Deserialize, Serialize};

use crate::consts::MIN_SCALE;
use crate::geometry::Vec2;

/// Zoom and pan state of one image slot.
///
/// Rendered as translate-then-scale: the image is scaled by `scale` about the
/// container centre and shifted by `offset * scale` on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Viewport {
    pub const IDENTITY: Self = Self {
        scale: MIN_SCALE,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    pub fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn with_offset(self, offset: Vec2) -> Self {
        Self {
            offset_x: offset.x,
            offset_y: offset.y,
            ..self
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Whether the viewport is magnified, which is what makes it draggable.
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Screen-space displacement of the image centre.
    pub fn screen_shift(&self) -> Vec2 {
        self.offset() * self.scale
    }
}

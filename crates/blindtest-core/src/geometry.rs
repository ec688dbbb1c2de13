use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::error::{BlindTestError, Result};

/// Width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or non-finite.
    pub fn is_empty(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self { width, height }
    }
}

/// A 2D point or displacement in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

/// Axis-aligned rectangle in screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub size: Size,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            size: Size::new(width, height),
        }
    }

    /// A rect of the given size anchored at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self { left: 0.0, top: 0.0, size }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.size.width / 2.0,
            self.top + self.size.height / 2.0,
        )
    }

    /// Position relative to the rect's centre.
    pub fn relative_to_center(&self, pos: Vec2) -> Vec2 {
        pos - self.center()
    }
}

/// What the rendering layer reports about one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    /// Natural pixel size of the image; `Size::ZERO` until it has loaded.
    pub natural: Size,
    /// Screen rect of the viewport surface.
    pub container: Rect,
}

/// Geometry capability supplied by whoever renders the viewports.
///
/// The engine only reads sizes through this trait and never reaches into the
/// renderer itself.
pub trait Measure {
    fn measure(&self, slot: usize) -> Measurement;
}

/// Which of the two container presets a viewport is displayed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContainerPreset {
    /// Small card in the static grid.
    #[default]
    Normal,
    /// Expand modal or compare modal.
    Expanded,
}

impl ContainerPreset {
    pub fn size(self, layout: &LayoutConfig) -> Size {
        match self {
            Self::Normal => layout.normal,
            Self::Expanded => layout.expanded,
        }
    }
}

impl std::fmt::Display for ContainerPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "Normal"),
            Self::Expanded => write!(f, "Expanded"),
        }
    }
}

/// A fixed set of measurements, one per slot.
///
/// Used wherever no live renderer exists: the CLI replay and the tests.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    slots: Vec<Measurement>,
}

impl StaticLayout {
    pub fn new(slots: Vec<Measurement>) -> Self {
        Self { slots }
    }

    /// Every slot gets the same container size at the origin.
    pub fn uniform(naturals: &[Size], container: Size) -> Self {
        let slots = naturals
            .iter()
            .map(|&natural| Measurement {
                natural,
                container: Rect::from_size(container),
            })
            .collect();
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Replace the natural size of one slot (e.g. once its image has loaded).
    pub fn set_natural(&mut self, slot: usize, natural: Size) -> Result<()> {
        let count = self.slots.len();
        let entry = self
            .slots
            .get_mut(slot)
            .ok_or(BlindTestError::SlotOutOfRange { slot, count })?;
        entry.natural = natural;
        Ok(())
    }
}

impl Measure for StaticLayout {
    fn measure(&self, slot: usize) -> Measurement {
        self.slots.get(slot).copied().unwrap_or_default()
    }
}

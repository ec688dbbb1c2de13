//! Multi-viewport zoom/pan/drag transform engine.
//!
//! Leaf-first: [`bounds`] is pure geometry, [`store`] holds one [`Viewport`]
//! per slot, [`zoom`], [`pan`] and [`drag`] mutate it, [`lock`] decides
//! between single-target and broadcast writes, and [`engine`] ties them
//! together behind the command surface the UI calls.

pub mod bounds;
pub mod drag;
pub mod engine;
pub mod lock;
pub mod pan;
pub mod store;
pub mod transform;
pub mod zoom;

pub use drag::{CursorAffordance, DragEnd, DragSession, DragState, NoCapture, PointerCapture};
pub use engine::{DisplayContext, TransformEngine};
pub use lock::{LockContext, LockFlags};
pub use store::ViewportStore;
pub use transform::Viewport;
pub use zoom::ZoomDirection;

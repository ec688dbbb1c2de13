/// Number of image slots shown per group.
pub const SLOT_COUNT: usize = 4;

/// Lower bound of the zoom scale. A viewport at this scale is never offset.
pub const MIN_SCALE: f64 = 1.0;

/// Upper bound of the zoom scale.
pub const MAX_SCALE: f64 = 5.0;

/// Multiplicative zoom step applied per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

/// Scales closer than this to `MIN_SCALE` snap to it, so repeated
/// zoom-in/zoom-out pairs land exactly on the reset state.
pub const SCALE_SNAP_EPSILON: f64 = 1e-9;

/// Card container size in the static grid (width, height in px).
pub const NORMAL_CONTAINER: (f64, f64) = (200.0, 260.0);

/// Container size in the expand and compare modals (width, height in px).
pub const EXPANDED_CONTAINER: (f64, f64) = (350.0, 500.0);

/// Default number of image groups in a survey.
pub const DEFAULT_TOTAL_GROUPS: usize = 3;

/// Duration of the transform animation when not dragging, in seconds.
pub const TRANSFORM_ANIMATION_SECS: f32 = 0.2;

/// Offset applied per arrow-key press when panning from the keyboard (px).
pub const KEYBOARD_PAN_STEP: f64 = 10.0;

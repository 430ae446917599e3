//! Default tuning values for the placement engine.
//!
//! All distances are in logical screen pixels.

/// How long a low-movement press must be held before a pin is placed.
pub const HOLD_DURATION_MS: u64 = 1000;

/// Distance from the press origin at which a press turns into a pan.
pub const MOVE_THRESHOLD_PX: f64 = 10.0;

/// Radius around the pin's screen position that counts as grabbing the pin.
pub const PIN_HIT_RADIUS_PX: f64 = 25.0;

/// Smallest allowed viewport scale.
pub const MIN_SCALE: f64 = 0.5;

/// Largest allowed viewport scale.
pub const MAX_SCALE: f64 = 5.0;

/// Fraction of the container a freshly fitted document occupies.
pub const FIT_MARGIN: f64 = 0.95;

/// Multiplier applied by one zoom button press or one wheel notch.
pub const ZOOM_STEP: f64 = 1.2;

/// Pinch distances below this are too small to derive a stable ratio from.
pub const MIN_PINCH_DISTANCE_PX: f64 = 1.0;

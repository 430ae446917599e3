//! Input abstraction layer.
//!
//! Mouse and touch arrive through the same stream: every physical contact is a
//! pointer keyed by id, and the platform layer translates its native events into
//! [`PointerEvent`]s. A mouse is simply a single pointer. Time advances only
//! through the timestamps carried by events, so a recorded stream replays
//! identically.

use serde::{Deserialize, Serialize};

use crate::geometry::ScreenPoint;

/// Identifier of one physical contact (mouse button or touch point).
pub type PointerId = u32;

/// One physical contact at a moment in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub id: PointerId,
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

impl PointerSample {
    pub fn new(id: PointerId, x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self {
            id,
            x,
            y,
            timestamp_ms,
        }
    }

    pub fn position(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// A normalized input event from any pointing device.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Contact started (mouse down, touch start).
    Down(PointerSample),

    /// Contact moved.
    Move(PointerSample),

    /// Contact ended normally.
    Up { id: PointerId },

    /// Contact was taken away by the platform (palm rejection, focus loss).
    Cancel { id: PointerId },

    /// Mouse wheel over the surface. `delta` is in notches; negative zooms in.
    Wheel { x: f64, y: f64, delta: f64 },

    /// Clock advance with no input attached.
    Tick { timestamp_ms: u64 },
}

impl PointerEvent {
    pub fn down(id: PointerId, x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self::Down(PointerSample::new(id, x, y, timestamp_ms))
    }

    pub fn moved(id: PointerId, x: f64, y: f64, timestamp_ms: u64) -> Self {
        Self::Move(PointerSample::new(id, x, y, timestamp_ms))
    }

    pub fn up(id: PointerId) -> Self {
        Self::Up { id }
    }

    pub fn cancel(id: PointerId) -> Self {
        Self::Cancel { id }
    }

    pub fn tick(timestamp_ms: u64) -> Self {
        Self::Tick { timestamp_ms }
    }

    /// Timestamp carried by the event, if any.
    pub fn timestamp_ms(&self) -> Option<u64> {
        match self {
            Self::Down(sample) | Self::Move(sample) => Some(sample.timestamp_ms),
            Self::Tick { timestamp_ms } => Some(*timestamp_ms),
            _ => None,
        }
    }

    /// All coordinates and deltas carried by the event are finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Down(sample) | Self::Move(sample) => sample.position().is_finite(),
            Self::Wheel { x, y, delta } => x.is_finite() && y.is_finite() && delta.is_finite(),
            _ => true,
        }
    }

    /// Pointer the event belongs to, if any.
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Self::Down(sample) | Self::Move(sample) => Some(sample.id),
            Self::Up { id } | Self::Cancel { id } => Some(*id),
            _ => None,
        }
    }
}

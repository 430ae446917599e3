//! Single-slot store for the defect location marker.

use std::fmt;

use planpin_core::NormPoint;
use serde::{Deserialize, Serialize};

/// The marker for a defect's location, in normalized document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub norm_x: f64,
    pub norm_y: f64,
}

impl Pin {
    pub fn location(&self) -> NormPoint {
        NormPoint::new(self.norm_x, self.norm_y)
    }
}

impl From<NormPoint> for Pin {
    fn from(point: NormPoint) -> Self {
        Self {
            norm_x: point.x,
            norm_y: point.y,
        }
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pin({:.4}, {:.4})", self.norm_x, self.norm_y)
    }
}

/// Holds at most one pin. Writes clamp into `[0,1]²` and replace unconditionally.
#[derive(Debug, Clone, Default)]
pub struct PinStore {
    pin: Option<Pin>,
}

impl PinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new pin, replacing any existing one.
    pub fn place_pin(&mut self, x: f64, y: f64) -> Pin {
        self.store(x, y)
    }

    /// Moves the pin to a new location. Creates it if none exists.
    pub fn drag_pin(&mut self, x: f64, y: f64) -> Pin {
        self.store(x, y)
    }

    pub fn clear_pin(&mut self) -> Option<Pin> {
        self.pin.take()
    }

    pub fn get_pin(&self) -> Option<Pin> {
        self.pin
    }

    pub fn has_pin(&self) -> bool {
        self.pin.is_some()
    }

    fn store(&mut self, x: f64, y: f64) -> Pin {
        let clamped = NormPoint::clamped(x, y);
        if clamped != NormPoint::new(x, y) {
            tracing::trace!(x, y, %clamped, "pin coordinate clamped into document");
        }
        let pin = Pin::from(clamped);
        self.pin = Some(pin);
        pin
    }
}

//! Error handling for PlanPin
//!
//! The placement surface absorbs almost every inconsistency locally: motion past
//! the document edge is clamped, transforms requested before a document is loaded
//! are no-ops, and stale hold-timer fires are discarded. Those conditions still get
//! a variant here so the absorbing code can name what it swallowed when it logs.
//!
//! The only error a user ever sees is [`PlacementError::MissingPinOnConfirm`].

use thiserror::Error;

/// Placement engine error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    /// A transform was requested before the renderer reported a document size
    #[error("No active document: the floor plan size is not known yet")]
    NoActiveDocument,

    /// A normalized coordinate fell outside the unit square
    #[error("Coordinate ({x:.4}, {y:.4}) is outside the floor plan")]
    InvalidCoordinate {
        /// Normalized X value that was rejected.
        x: f64,
        /// Normalized Y value that was rejected.
        y: f64,
    },

    /// A hold timer fired for a press session that has already ended
    #[error("Stale hold timer fire (epoch {fired}, current {current:?})")]
    StaleTimerFire {
        /// Epoch carried by the timer that fired.
        fired: u64,
        /// Epoch of the live timer, if one is armed.
        current: Option<u64>,
    },

    /// Confirm was requested with no pin on the floor plan
    #[error("No pin placed: press and hold on the floor plan to place a pin before confirming")]
    MissingPinOnConfirm,
}

impl PlacementError {
    /// Whether this error is only ever absorbed by the engine and never shown to a user.
    pub fn is_absorbed(&self) -> bool {
        matches!(
            self,
            PlacementError::NoActiveDocument
                | PlacementError::InvalidCoordinate { .. }
                | PlacementError::StaleTimerFire { .. }
        )
    }
}

/// Result type using PlacementError
pub type Result<T> = std::result::Result<T, PlacementError>;

//! # PlanPin Core
//!
//! Core types shared by the PlanPin crates.
//! Provides the geometry primitives for screen and normalized document space,
//! the device-independent pointer event stream, the error taxonomy and the
//! default tuning constants of the placement engine.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;

pub use error::{PlacementError, Result};
pub use geometry::{NormPoint, ScreenPoint, Size};
pub use input::{PointerEvent, PointerId, PointerSample};

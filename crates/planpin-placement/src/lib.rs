//! # PlanPin Placement
//!
//! The interaction engine behind placing a defect pin on a floor plan. It turns
//! a device-independent pointer stream into pin placements, pin drags, pans and
//! zooms over a document that always stays centred in its container.
//!
//! ## Core Components
//!
//! - **Viewport**: scale/pan state and the invertible screen ↔ document transform
//! - **Pin store**: the single normalized pin, clamped into the unit square
//! - **Hold timer**: epoch-guarded press-and-hold commit
//! - **Gesture recognizer**: Idle / Pressing / Panning / Pinching / PinDragging
//! - **Session**: the facade an embedding UI drives, producing [`PinPlacement`]
//!
//! ## Architecture
//!
//! ```text
//! PointerEvent stream
//!   └── GestureRecognizer
//!         ├── PointerSession (active contacts)
//!         ├── HoldTimerController (press sessions)
//!         ├── Viewport (zoom / pan / transforms)
//!         └── PinStore (placed pin)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use planpin_core::{PointerEvent, Size};
//! use planpin_placement::PlacementSession;
//! use planpin_settings::Config;
//!
//! let mut session = PlacementSession::with_container(Size::new(800.0, 600.0), &Config::default());
//! session.set_document_size(Size::new(1600.0, 1200.0));
//!
//! session.handle(&PointerEvent::down(1, 400.0, 300.0, 0));
//! session.handle(&PointerEvent::tick(1000));
//!
//! let placement = session.confirm(42).unwrap();
//! assert!((placement.norm_x - 0.5).abs() < 1e-9);
//! ```

pub mod gesture;
pub mod hold_timer;
pub mod pin;
pub mod pointers;
pub mod session;
pub mod viewport;

pub use gesture::{GestureIntent, GestureRecognizer, GestureState, PinchBaseline};
pub use hold_timer::{HoldTimer, HoldTimerController};
pub use pin::{Pin, PinStore};
pub use pointers::{ActivePointer, PointerSession};
pub use session::{PinPlacement, PlacementSession};
pub use viewport::Viewport;

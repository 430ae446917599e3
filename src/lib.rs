//! # PlanPin
//!
//! Floor-plan pin placement engine: press-and-hold to drop a defect pin, drag it
//! to refine, pan and pinch or wheel-zoom the plan, all from one unified pointer
//! stream.
//!
//! ## Architecture
//!
//! PlanPin is organized as a workspace with multiple crates:
//!
//! 1. **planpin-core** - Geometry, pointer events, error taxonomy, constants
//! 2. **planpin-settings** - Configuration defaults, validation and file I/O
//! 3. **planpin-placement** - Viewport, pin store, hold timer, gesture recognizer
//! 4. **planpin** - This crate: re-exports, logging setup, script replay and the CLI
//!
//! ## Features
//!
//! - **Hold-to-place**: a still press of `hold_duration_ms` commits a pin
//! - **Unified input**: mouse and touch share one pointer-id keyed session
//! - **Navigation**: pan, pinch zoom, wheel zoom and zoom buttons, all anchored
//! - **Stable coordinates**: pins are stored normalized to the floor plan

pub mod script;

pub use planpin_core::{
    NormPoint, PlacementError, PointerEvent, PointerId, PointerSample, Result, ScreenPoint, Size,
};
pub use planpin_placement::{
    GestureIntent, GestureRecognizer, GestureState, Pin, PinPlacement, PinStore,
    PlacementSession, Viewport,
};
pub use planpin_settings::{Config, GestureSettings, SettingsError, ViewportSettings};
pub use script::ReplayScript;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

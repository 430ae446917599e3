//! PlanPin Settings Crate
//!
//! Handles the engine configuration surface: defaults, validation and
//! JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{Config, GestureSettings, ViewportSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

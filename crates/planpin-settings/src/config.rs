//! Configuration for the pin placement engine
//!
//! Recognized options are split into two sections:
//! - Gesture settings (hold duration, movement threshold, pin hit radius)
//! - Viewport settings (scale bounds, fit margin, zoom step)
//!
//! Files may be JSON or TOML, chosen by extension. Missing sections and fields
//! fall back to the defaults in [`planpin_core::constants`].

use std::path::{Path, PathBuf};

use planpin_core::constants;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Gesture recognition thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Press duration that commits a pin, in milliseconds
    pub hold_duration_ms: u64,
    /// Movement from the press origin that turns a press into a pan, in pixels
    pub move_threshold_px: f64,
    /// Grab radius around an existing pin, in pixels
    pub pin_hit_radius_px: f64,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            hold_duration_ms: constants::HOLD_DURATION_MS,
            move_threshold_px: constants::MOVE_THRESHOLD_PX,
            pin_hit_radius_px: constants::PIN_HIT_RADIUS_PX,
        }
    }
}

/// Viewport scale limits and zoom behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Fraction of the container used when fitting the document on reset
    pub fit_margin: f64,
    /// Multiplier for zoom buttons and one wheel notch
    pub zoom_step: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            min_scale: constants::MIN_SCALE,
            max_scale: constants::MAX_SCALE,
            fit_margin: constants::FIT_MARGIN,
            zoom_step: constants::ZOOM_STEP,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub gesture: GestureSettings,
    pub viewport: ViewportSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location in the platform config directory.
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("planpin").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("platform config directory unavailable".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded placement config");
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise return defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "config file missing, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = FileFormat::from_path(path)?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let gesture = &self.gesture;
        if gesture.hold_duration_ms == 0 {
            return Err(ConfigError::out_of_range("gesture.hold_duration_ms", 0));
        }
        if !(gesture.move_threshold_px.is_finite() && gesture.move_threshold_px >= 0.0) {
            return Err(ConfigError::out_of_range(
                "gesture.move_threshold_px",
                gesture.move_threshold_px,
            ));
        }
        if !(gesture.pin_hit_radius_px.is_finite() && gesture.pin_hit_radius_px >= 0.0) {
            return Err(ConfigError::out_of_range(
                "gesture.pin_hit_radius_px",
                gesture.pin_hit_radius_px,
            ));
        }

        let viewport = &self.viewport;
        if !(viewport.min_scale.is_finite() && viewport.min_scale > 0.0) {
            return Err(ConfigError::out_of_range(
                "viewport.min_scale",
                viewport.min_scale,
            ));
        }
        if !(viewport.max_scale.is_finite() && viewport.max_scale >= viewport.min_scale) {
            return Err(ConfigError::out_of_range(
                "viewport.max_scale",
                viewport.max_scale,
            ));
        }
        if !(viewport.fit_margin > 0.0 && viewport.fit_margin <= 1.0) {
            return Err(ConfigError::out_of_range(
                "viewport.fit_margin",
                viewport.fit_margin,
            ));
        }
        if !(viewport.zoom_step.is_finite() && viewport.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range(
                "viewport.zoom_step",
                viewport.zoom_step,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

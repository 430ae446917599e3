//! Recorded pointer scripts.
//!
//! A script captures one placement session: the floor plan, the surface it was
//! shown in, an optional pin restored from an earlier report, and the pointer
//! events in arrival order. Replaying it yields the same placement the live UI
//! would have confirmed.
//!
//! ```toml
//! floor_plan_id = 7
//! document = { width = 1600.0, height = 1200.0 }
//! container = { width = 800.0, height = 600.0 }
//!
//! [[events]]
//! type = "down"
//! id = 1
//! x = 400.0
//! y = 300.0
//! timestamp_ms = 0
//!
//! [[events]]
//! type = "tick"
//! timestamp_ms = 1000
//! ```

use std::path::Path;

use anyhow::{bail, Context};
use planpin_core::{NormPoint, PointerEvent, Size};
use planpin_placement::{PinPlacement, PlacementSession};
use planpin_settings::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    pub floor_plan_id: i64,
    pub document: Size,
    pub container: Size,
    /// Pin of the defect being edited, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing_pin: Option<NormPoint>,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

impl ReplayScript {
    /// Load a script from a JSON or TOML file, chosen by extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;

        let script = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("parsing JSON script {}", path.display()))?,
            Some("toml") => toml::from_str(&content)
                .with_context(|| format!("parsing TOML script {}", path.display()))?,
            other => bail!("unsupported script format: {}", other.unwrap_or("<none>")),
        };
        Ok(script)
    }

    /// Builds a session for this script and feeds it every event.
    pub fn run(&self, config: &Config) -> planpin_core::Result<PlacementSession> {
        let mut session = PlacementSession::with_container(self.container, config);
        session.set_document_size(self.document);
        if let Some(pin) = self.existing_pin {
            session.restore_pin(pin.x, pin.y)?;
        }

        let intents = session.handle_all(&self.events);
        tracing::debug!(
            events = self.events.len(),
            intents = intents.len(),
            state = %session.state(),
            "script replayed"
        );
        Ok(session)
    }

    /// Replays the script and confirms the resulting pin.
    pub fn replay(&self, config: &Config) -> planpin_core::Result<PinPlacement> {
        self.run(config)?.confirm(self.floor_plan_id)
    }
}

//! Placement session: one floor plan, one pin, one gesture recognizer.
//!
//! This is the surface an embedding UI talks to. It owns the viewport, the pin
//! store and the recognizer, routes pointer events through them, and produces
//! the confirmed [`PinPlacement`] record.

use planpin_core::{NormPoint, PlacementError, PointerEvent, Result, ScreenPoint, Size};
use planpin_settings::Config;
use serde::{Deserialize, Serialize};

use crate::gesture::{GestureIntent, GestureRecognizer, GestureState};
use crate::pin::{Pin, PinStore};
use crate::viewport::Viewport;

/// Confirmed pin location handed to the defect-reporting workflow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinPlacement {
    pub norm_x: f64,
    pub norm_y: f64,
    pub floor_plan_id: i64,
}

#[derive(Debug, Clone)]
pub struct PlacementSession {
    viewport: Viewport,
    pins: PinStore,
    recognizer: GestureRecognizer,
}

impl PlacementSession {
    pub fn new(config: &Config) -> Self {
        Self {
            viewport: Viewport::new(&config.viewport),
            pins: PinStore::new(),
            recognizer: GestureRecognizer::new(config.gesture.clone()),
        }
    }

    pub fn with_container(container: Size, config: &Config) -> Self {
        let mut session = Self::new(config);
        session.viewport.set_container_size(container);
        session
    }

    /// Records the loaded floor plan's native size and fits it to the container.
    ///
    /// Any gesture in progress is abandoned. Unusable sizes are ignored and
    /// leave the current document and gesture alone.
    pub fn set_document_size(&mut self, size: Size) {
        if !size.is_usable() {
            tracing::debug!(%size, "ignoring unusable document size");
            return;
        }
        self.recognizer.abort();
        self.viewport.set_document_size(size);
        tracing::debug!(%size, viewport = %self.viewport, "document loaded");
    }

    pub fn set_container_size(&mut self, size: Size) {
        self.viewport.set_container_size(size);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    pub fn zoom_in(&mut self) -> f64 {
        self.viewport.zoom_in()
    }

    pub fn zoom_out(&mut self) -> f64 {
        self.viewport.zoom_out()
    }

    /// Sets an absolute scale, keeping the current pan.
    pub fn set_scale(&mut self, scale: f64) -> f64 {
        self.viewport.set_scale(scale, None)
    }

    pub fn handle(&mut self, event: &PointerEvent) -> Vec<GestureIntent> {
        self.recognizer
            .handle(event, &mut self.viewport, &mut self.pins)
    }

    /// Handles a batch of events in order, concatenating their intents.
    pub fn handle_all<'a, I>(&mut self, events: I) -> Vec<GestureIntent>
    where
        I: IntoIterator<Item = &'a PointerEvent>,
    {
        events
            .into_iter()
            .flat_map(|event| self.handle(event))
            .collect()
    }

    /// Delivers an externally scheduled hold timer fire.
    pub fn hold_timer_fired(&mut self, epoch: u64) -> Vec<GestureIntent> {
        self.recognizer
            .hold_timer_fired(epoch, &self.viewport, &mut self.pins)
    }

    pub fn state(&self) -> GestureState {
        self.recognizer.state()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn recognizer(&self) -> &GestureRecognizer {
        &self.recognizer
    }

    pub fn pin(&self) -> Option<Pin> {
        self.pins.get_pin()
    }

    /// Removes the pin. A drag of that pin in progress ends with it.
    pub fn clear_pin(&mut self) -> Option<Pin> {
        if self.recognizer.state() == GestureState::PinDragging {
            self.recognizer.interrupt();
        }
        self.pins.clear_pin()
    }

    /// Restores a previously saved pin, e.g. when re-opening a draft report.
    pub fn restore_pin(&mut self, x: f64, y: f64) -> Result<Pin> {
        let location = NormPoint::checked(x, y).inspect_err(|err| {
            tracing::warn!(%err, "refusing to restore pin");
        })?;
        Ok(self.pins.place_pin(location.x, location.y))
    }

    /// Where the pin currently renders, if there is a pin and a document.
    pub fn pin_screen_position(&self) -> Option<ScreenPoint> {
        let pin = self.pins.get_pin()?;
        self.viewport.document_to_screen(pin.location()).ok()
    }

    pub fn hold_progress(&self, now_ms: u64) -> Option<f64> {
        self.recognizer.hold_progress(now_ms)
    }

    /// Produces the placement record for the current pin.
    pub fn confirm(&self, floor_plan_id: i64) -> Result<PinPlacement> {
        let Some(pin) = self.pins.get_pin() else {
            let err = PlacementError::MissingPinOnConfirm;
            tracing::warn!(floor_plan_id, %err, "confirm rejected");
            return Err(err);
        };
        let placement = PinPlacement {
            norm_x: pin.norm_x,
            norm_y: pin.norm_y,
            floor_plan_id,
        };
        tracing::info!(floor_plan_id, %pin, "pin placement confirmed");
        Ok(placement)
    }
}

impl Default for PlacementSession {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

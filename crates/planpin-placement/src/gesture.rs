//! Gesture recognizer for the floor-plan surface.
//!
//! Consumes the unified pointer stream and decides, per input session, whether
//! the user is pressing to place a pin, panning, pinching or dragging the
//! existing pin. The decision depends only on the current state, the active
//! pointer count and the pin hit test, never on the input device.
//!
//! | Event | From | To |
//! |-------|------|----|
//! | first down on the pin | Idle | PinDragging |
//! | first down elsewhere | Idle | Pressing (hold timer armed) |
//! | move ≥ threshold from origin | Pressing | Panning |
//! | hold timer fires | Pressing | Idle (pin placed) |
//! | up / cancel before fire | Pressing | Idle (no-op tap) |
//! | second down | Idle, Pressing, Panning, PinDragging | Pinching |
//! | pointer count change | Pinching | Pinching (re-baselined) |
//! | count drops to one | Pinching | Panning |
//! | count drops to zero | Pinching | Idle |
//! | up / cancel | Panning, PinDragging | Idle |

use std::fmt;

use planpin_core::constants::MIN_PINCH_DISTANCE_PX;
use planpin_core::{PlacementError, PointerEvent, PointerId, PointerSample, ScreenPoint};
use planpin_settings::GestureSettings;
use serde::{Deserialize, Serialize};

use crate::hold_timer::{HoldTimer, HoldTimerController};
use crate::pin::{Pin, PinStore};
use crate::pointers::PointerSession;
use crate::viewport::Viewport;

/// Publicly observable recognizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureState {
    Idle,
    Pressing,
    Panning,
    Pinching,
    PinDragging,
}

impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Pressing => write!(f, "pressing"),
            Self::Panning => write!(f, "panning"),
            Self::Pinching => write!(f, "pinching"),
            Self::PinDragging => write!(f, "pin-dragging"),
        }
    }
}

/// High-level outcome of one handled event, for the embedding UI to react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureIntent {
    StateChanged {
        from: GestureState,
        to: GestureState,
    },
    /// A hold timer was armed; platforms with their own timers schedule a fire for `epoch`.
    HoldArmed { epoch: u64, deadline_ms: u64 },
    HoldCancelled { epoch: u64 },
    PinPlaced(Pin),
    PinMoved(Pin),
    Panned { dx: f64, dy: f64 },
    Zoomed { scale: f64 },
}

/// Distance and scale captured whenever the pinching pointer set changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchBaseline {
    pub initial_distance: f64,
    pub initial_scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Idle,
    Pressing {
        pointer: PointerId,
        origin: ScreenPoint,
        epoch: u64,
    },
    Panning {
        pointer: PointerId,
        last: ScreenPoint,
    },
    Pinching(PinchBaseline),
    PinDragging {
        pointer: PointerId,
        offset: ScreenPoint,
    },
}

impl Mode {
    fn state(&self) -> GestureState {
        match self {
            Mode::Idle => GestureState::Idle,
            Mode::Pressing { .. } => GestureState::Pressing,
            Mode::Panning { .. } => GestureState::Panning,
            Mode::Pinching(_) => GestureState::Pinching,
            Mode::PinDragging { .. } => GestureState::PinDragging,
        }
    }
}

/// The pointer gesture state machine.
///
/// Owns pointer tracking and the hold timer; the viewport and pin store are
/// borrowed per event from whoever owns the surface.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    settings: GestureSettings,
    mode: Mode,
    pointers: PointerSession,
    timers: HoldTimerController,
    now_ms: u64,
}

impl GestureRecognizer {
    pub fn new(settings: GestureSettings) -> Self {
        let timers = HoldTimerController::new(settings.hold_duration_ms);
        Self {
            settings,
            mode: Mode::Idle,
            pointers: PointerSession::new(),
            timers,
            now_ms: 0,
        }
    }

    pub fn state(&self) -> GestureState {
        self.mode.state()
    }

    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    pub fn pointers(&self) -> &PointerSession {
        &self.pointers
    }

    pub fn hold_timer(&self) -> &HoldTimerController {
        &self.timers
    }

    /// Latest timestamp seen on the event stream.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pinch_baseline(&self) -> Option<PinchBaseline> {
        match self.mode {
            Mode::Pinching(baseline) => Some(baseline),
            _ => None,
        }
    }

    /// Fraction of the hold elapsed at `now_ms` while pressing.
    pub fn hold_progress(&self, now_ms: u64) -> Option<f64> {
        match self.mode {
            Mode::Pressing { .. } => self.timers.progress(now_ms),
            _ => None,
        }
    }

    /// Handles one input event.
    pub fn handle(
        &mut self,
        event: &PointerEvent,
        viewport: &mut Viewport,
        pins: &mut PinStore,
    ) -> Vec<GestureIntent> {
        let mut intents = Vec::new();

        if !event.is_finite() {
            tracing::debug!(?event, "dropping event with non-finite coordinates");
            return intents;
        }

        // A due hold fires before the event that revealed the clock passed it.
        if let Some(timestamp_ms) = event.timestamp_ms() {
            self.advance_clock(timestamp_ms, viewport, pins, &mut intents);
        }

        match *event {
            PointerEvent::Down(sample) => self.on_down(&sample, viewport, pins, &mut intents),
            PointerEvent::Move(sample) => self.on_move(&sample, viewport, pins, &mut intents),
            PointerEvent::Up { id } | PointerEvent::Cancel { id } => {
                self.on_release(id, viewport, &mut intents)
            }
            PointerEvent::Wheel { x, y, delta } => {
                self.on_wheel(ScreenPoint::new(x, y), delta, viewport, &mut intents)
            }
            PointerEvent::Tick { .. } => {}
        }

        intents
    }

    /// Entry point for platforms that schedule the hold with their own timer.
    pub fn hold_timer_fired(
        &mut self,
        epoch: u64,
        viewport: &Viewport,
        pins: &mut PinStore,
    ) -> Vec<GestureIntent> {
        let mut intents = Vec::new();
        match self.timers.fire(epoch) {
            Ok(timer) => self.commit_hold(timer, viewport, pins, &mut intents),
            Err(err) => tracing::debug!(%err, "discarding hold timer fire"),
        }
        intents
    }

    /// Ends the current gesture but keeps tracking the pointers that are down.
    pub fn interrupt(&mut self) -> Vec<GestureIntent> {
        let mut intents = Vec::new();
        self.cancel_hold(&mut intents);
        self.transition(Mode::Idle, &mut intents);
        intents
    }

    /// Drops all input state, as if every pointer had been cancelled.
    pub fn abort(&mut self) -> Vec<GestureIntent> {
        self.pointers.clear();
        self.interrupt()
    }

    fn advance_clock(
        &mut self,
        timestamp_ms: u64,
        viewport: &Viewport,
        pins: &mut PinStore,
        intents: &mut Vec<GestureIntent>,
    ) {
        self.now_ms = self.now_ms.max(timestamp_ms);
        if let Some(timer) = self.timers.poll(self.now_ms) {
            self.commit_hold(timer, viewport, pins, intents);
        }
    }

    fn commit_hold(
        &mut self,
        timer: HoldTimer,
        viewport: &Viewport,
        pins: &mut PinStore,
        intents: &mut Vec<GestureIntent>,
    ) {
        match self.mode {
            Mode::Pressing { epoch, .. } if epoch == timer.session_epoch => {}
            _ => {
                let err = PlacementError::StaleTimerFire {
                    fired: timer.session_epoch,
                    current: self.timers.current_epoch(),
                };
                tracing::debug!(%err, "hold fired outside its press session");
                return;
            }
        }

        match viewport.screen_to_document(timer.origin) {
            Ok(norm) => {
                let pin = pins.place_pin(norm.x, norm.y);
                tracing::info!(%pin, origin = %timer.origin, "pin placed by hold");
                intents.push(GestureIntent::PinPlaced(pin));
            }
            Err(err) => tracing::debug!(%err, "hold completed, no pin placed"),
        }
        self.transition(Mode::Idle, intents);
    }

    fn on_down(
        &mut self,
        sample: &PointerSample,
        viewport: &mut Viewport,
        pins: &mut PinStore,
        intents: &mut Vec<GestureIntent>,
    ) {
        if !self.pointers.press(sample) {
            tracing::trace!(id = sample.id, "repeated down for active pointer");
            return;
        }

        if self.pointers.count() == 1 {
            self.begin_single(sample, viewport, pins, intents);
        } else {
            self.begin_pinch(viewport, intents);
        }
    }

    fn begin_single(
        &mut self,
        sample: &PointerSample,
        viewport: &Viewport,
        pins: &PinStore,
        intents: &mut Vec<GestureIntent>,
    ) {
        if self.mode != Mode::Idle {
            tracing::debug!(state = %self.state(), "first pointer outside idle, resetting");
            self.cancel_hold(intents);
            self.transition(Mode::Idle, intents);
        }

        let position = sample.position();
        if let Some(pin_screen) = self.pin_hit(position, viewport, pins) {
            self.transition(
                Mode::PinDragging {
                    pointer: sample.id,
                    offset: position - pin_screen,
                },
                intents,
            );
            return;
        }

        let epoch = self.timers.arm(position, self.now_ms);
        if let Some(timer) = self.timers.live() {
            intents.push(GestureIntent::HoldArmed {
                epoch,
                deadline_ms: timer.deadline_ms,
            });
        }
        self.transition(
            Mode::Pressing {
                pointer: sample.id,
                origin: position,
                epoch,
            },
            intents,
        );
    }

    /// Screen position of the pin if `position` is within the grab radius.
    fn pin_hit(
        &self,
        position: ScreenPoint,
        viewport: &Viewport,
        pins: &PinStore,
    ) -> Option<ScreenPoint> {
        let pin = pins.get_pin()?;
        let pin_screen = viewport.document_to_screen(pin.location()).ok()?;
        (position.distance_to(&pin_screen) <= self.settings.pin_hit_radius_px).then_some(pin_screen)
    }

    fn begin_pinch(&mut self, viewport: &Viewport, intents: &mut Vec<GestureIntent>) {
        match self.mode {
            Mode::Pressing { .. } => self.cancel_hold(intents),
            Mode::PinDragging { .. } => tracing::debug!("pin drag ended by second pointer"),
            _ => {}
        }
        self.rebaseline(viewport, intents);
    }

    /// Captures distance and scale for the current pointer pair and enters `Pinching`.
    fn rebaseline(&mut self, viewport: &Viewport, intents: &mut Vec<GestureIntent>) {
        let Some((a, b)) = self.pointers.pinch_pair() else {
            return;
        };
        let baseline = PinchBaseline {
            initial_distance: a.distance_to(&b),
            initial_scale: viewport.scale(),
        };
        tracing::trace!(?baseline, pointers = self.pointers.count(), "pinch baseline");
        self.transition(Mode::Pinching(baseline), intents);
    }

    fn on_move(
        &mut self,
        sample: &PointerSample,
        viewport: &mut Viewport,
        pins: &mut PinStore,
        intents: &mut Vec<GestureIntent>,
    ) {
        if self.pointers.update(sample).is_none() {
            tracing::trace!(id = sample.id, "move for unknown pointer ignored");
            return;
        }
        let position = sample.position();

        match self.mode {
            Mode::Pressing {
                pointer, origin, ..
            } if pointer == sample.id => {
                if position.distance_to(&origin) >= self.settings.move_threshold_px {
                    self.cancel_hold(intents);
                    self.transition(Mode::Panning { pointer, last: origin }, intents);
                    self.pan_to(pointer, origin, position, viewport, intents);
                }
            }
            Mode::Panning { pointer, last } if pointer == sample.id => {
                self.pan_to(pointer, last, position, viewport, intents);
            }
            Mode::Pinching(baseline) => self.apply_pinch(baseline, viewport, intents),
            Mode::PinDragging { pointer, offset } if pointer == sample.id => {
                match viewport.screen_to_document(position - offset) {
                    Ok(norm) => {
                        let pin = pins.drag_pin(norm.x, norm.y);
                        intents.push(GestureIntent::PinMoved(pin));
                    }
                    Err(err) => tracing::debug!(%err, "pin drag move ignored"),
                }
            }
            _ => {}
        }
    }

    fn pan_to(
        &mut self,
        pointer: PointerId,
        last: ScreenPoint,
        position: ScreenPoint,
        viewport: &mut Viewport,
        intents: &mut Vec<GestureIntent>,
    ) {
        let delta = position - last;
        viewport.pan_by(delta.x, delta.y);
        self.mode = Mode::Panning {
            pointer,
            last: position,
        };
        tracing::trace!(dx = delta.x, dy = delta.y, "pan");
        intents.push(GestureIntent::Panned {
            dx: delta.x,
            dy: delta.y,
        });
    }

    fn apply_pinch(
        &mut self,
        baseline: PinchBaseline,
        viewport: &mut Viewport,
        intents: &mut Vec<GestureIntent>,
    ) {
        let Some((a, b)) = self.pointers.pinch_pair() else {
            return;
        };
        if baseline.initial_distance < MIN_PINCH_DISTANCE_PX {
            return;
        }
        let ratio = a.distance_to(&b) / baseline.initial_distance;
        let scale = viewport.set_scale(baseline.initial_scale * ratio, Some(a.midpoint(&b)));
        intents.push(GestureIntent::Zoomed { scale });
    }

    fn on_release(
        &mut self,
        id: PointerId,
        viewport: &Viewport,
        intents: &mut Vec<GestureIntent>,
    ) {
        if self.pointers.release(id).is_none() {
            tracing::trace!(id, "release for unknown pointer ignored");
            return;
        }

        match self.mode {
            Mode::Pressing { pointer, .. } if pointer == id => {
                // A tap that trips neither threshold does nothing.
                self.cancel_hold(intents);
                self.transition(Mode::Idle, intents);
            }
            Mode::Panning { pointer, .. } if pointer == id => {
                self.transition(Mode::Idle, intents);
            }
            Mode::PinDragging { pointer, .. } if pointer == id => {
                self.transition(Mode::Idle, intents);
            }
            Mode::Pinching(_) => match self.pointers.primary().copied() {
                None => self.transition(Mode::Idle, intents),
                Some(remaining) if self.pointers.count() == 1 => {
                    self.transition(
                        Mode::Panning {
                            pointer: remaining.id,
                            last: remaining.position,
                        },
                        intents,
                    );
                }
                Some(_) => self.rebaseline(viewport, intents),
            },
            _ => {}
        }
    }

    fn on_wheel(
        &mut self,
        anchor: ScreenPoint,
        delta: f64,
        viewport: &mut Viewport,
        intents: &mut Vec<GestureIntent>,
    ) {
        if self.mode != Mode::Idle || !self.pointers.is_empty() {
            tracing::trace!(state = %self.state(), "wheel ignored during gesture");
            return;
        }
        if delta == 0.0 || !delta.is_finite() {
            return;
        }
        let scale = viewport.zoom_wheel(delta, anchor);
        intents.push(GestureIntent::Zoomed { scale });
    }

    fn cancel_hold(&mut self, intents: &mut Vec<GestureIntent>) {
        if let Some(timer) = self.timers.cancel() {
            intents.push(GestureIntent::HoldCancelled {
                epoch: timer.session_epoch,
            });
        }
    }

    fn transition(&mut self, to: Mode, intents: &mut Vec<GestureIntent>) {
        let from = self.mode.state();
        self.mode = to;
        let to = to.state();
        if from != to {
            tracing::debug!(%from, %to, "gesture state changed");
            intents.push(GestureIntent::StateChanged { from, to });
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

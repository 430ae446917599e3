//! Press-and-hold commit timer.
//!
//! At most one timer is live at a time. Each arm starts a new session epoch; a
//! fire is only honoured when its epoch matches the live timer, so a fire that
//! raced a cancellation is recognised as stale and dropped.
//!
//! Time is whatever the caller says it is: [`HoldTimerController::poll`] is driven
//! by event timestamps, and platforms with a real timer call
//! [`HoldTimerController::fire`] with the epoch they were handed at arm time.

use planpin_core::{PlacementError, Result, ScreenPoint};

/// A scheduled hold commit for one press session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoldTimer {
    /// Screen position where the press started.
    pub origin: ScreenPoint,
    /// Epoch of the press session that armed the timer.
    pub session_epoch: u64,
    pub armed_at_ms: u64,
    pub deadline_ms: u64,
}

#[derive(Debug, Clone)]
pub struct HoldTimerController {
    duration_ms: u64,
    live: Option<HoldTimer>,
    epoch: u64,
}

impl HoldTimerController {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            live: None,
            epoch: 0,
        }
    }

    /// Arms a new timer, replacing any live one, and returns its session epoch.
    pub fn arm(&mut self, origin: ScreenPoint, now_ms: u64) -> u64 {
        if let Some(previous) = self.live.take() {
            tracing::debug!(epoch = previous.session_epoch, "replacing live hold timer");
        }
        self.epoch += 1;
        self.live = Some(HoldTimer {
            origin,
            session_epoch: self.epoch,
            armed_at_ms: now_ms,
            deadline_ms: now_ms.saturating_add(self.duration_ms),
        });
        tracing::trace!(epoch = self.epoch, %origin, "hold timer armed");
        self.epoch
    }

    /// Cancels the live timer, if any.
    pub fn cancel(&mut self) -> Option<HoldTimer> {
        let cancelled = self.live.take();
        if let Some(timer) = &cancelled {
            tracing::trace!(epoch = timer.session_epoch, "hold timer cancelled");
        }
        cancelled
    }

    pub fn is_armed(&self) -> bool {
        self.live.is_some()
    }

    pub fn live(&self) -> Option<&HoldTimer> {
        self.live.as_ref()
    }

    /// Epoch of the live timer.
    pub fn current_epoch(&self) -> Option<u64> {
        self.live.map(|timer| timer.session_epoch)
    }

    /// Takes the live timer if its deadline has been reached at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<HoldTimer> {
        match self.live {
            Some(timer) if now_ms >= timer.deadline_ms => self.live.take(),
            _ => None,
        }
    }

    /// Takes the live timer for an externally scheduled fire tagged with `epoch`.
    pub fn fire(&mut self, epoch: u64) -> Result<HoldTimer> {
        match self.live {
            Some(timer) if timer.session_epoch == epoch => {
                self.live = None;
                Ok(timer)
            }
            _ => Err(PlacementError::StaleTimerFire {
                fired: epoch,
                current: self.current_epoch(),
            }),
        }
    }

    /// Fraction of the hold duration elapsed at `now_ms`, in `[0,1]`.
    pub fn progress(&self, now_ms: u64) -> Option<f64> {
        let timer = self.live?;
        let elapsed = now_ms.saturating_sub(timer.armed_at_ms) as f64;
        Some((elapsed / self.duration_ms.max(1) as f64).min(1.0))
    }
}

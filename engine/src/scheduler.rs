//! Timer that keeps changing the opponent's hand.
//!
//! The scheduler is a single deadline owned by the [`App`](crate::App) and
//! polled once per frame. Firing draws a new hand and re-arms from the firing
//! time; an open dialog pauses the chain until [`HandScheduler::start`] is
//! called again.

use std::time::{Duration, Instant};

use janken_types::Hand;
use rand::Rng;
use tracing::debug;

use crate::opponent::{DialogFlag, OpponentState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerState {
    Stopped,
    Armed { due: Instant },
}

#[derive(Debug, Clone)]
pub struct HandScheduler {
    interval: Duration,
    state: SchedulerState,
}

impl HandScheduler {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: SchedulerState::Stopped,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, SchedulerState::Armed { .. })
    }

    /// Deadline of the pending firing, if armed.
    #[must_use]
    pub fn due(&self) -> Option<Instant> {
        match self.state {
            SchedulerState::Armed { due } => Some(due),
            SchedulerState::Stopped => None,
        }
    }

    /// Arm the timer. Returns `false` without changing anything when the
    /// dialog is open or a firing is already pending.
    pub fn start(&mut self, now: Instant, dialog: DialogFlag) -> bool {
        if dialog.is_open() || self.is_armed() {
            return false;
        }
        self.state = SchedulerState::Armed {
            due: now + self.interval,
        };
        true
    }

    pub fn stop(&mut self) {
        self.state = SchedulerState::Stopped;
    }

    /// Fire if the deadline has passed.
    ///
    /// Returns the newly assigned hand. With the dialog open the chain stops
    /// and `opponent` is left alone.
    pub fn poll<R: Rng>(
        &mut self,
        now: Instant,
        opponent: &mut OpponentState,
        dialog: DialogFlag,
        rng: &mut R,
    ) -> Option<Hand> {
        let SchedulerState::Armed { due } = self.state else {
            return None;
        };
        if now < due {
            return None;
        }

        self.state = SchedulerState::Stopped;
        if dialog.is_open() {
            debug!("Opponent refresh paused while result dialog is open");
            return None;
        }

        let hand = Hand::from_index(rng.random_range(0..Hand::ALL.len()));
        opponent.assign(hand);
        debug!(hand = %hand, revision = opponent.revision(), "Opponent hand refreshed");

        self.start(now, dialog);
        Some(hand)
    }
}

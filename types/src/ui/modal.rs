//! Pop-in animation for the result dialog.

use std::time::Duration;

use super::animation::{AnimPhase, EffectTimer};

#[derive(Debug, Clone)]
pub struct ModalEffect {
    timer: EffectTimer,
}

impl ModalEffect {
    /// Dialog grows from 60% to full size.
    #[must_use]
    pub fn pop_scale(duration: Duration) -> Self {
        Self {
            timer: EffectTimer::new(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.timer.advance(delta);
    }

    #[must_use]
    pub fn phase(&self) -> AnimPhase {
        self.timer.phase()
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.timer.progress()
    }
}

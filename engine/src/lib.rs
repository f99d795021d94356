//! Core engine for Janken - game state and the opponent timer.
//!
//! This crate contains the App state machine without TUI dependencies.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

pub use janken_types::ui::{AnimPhase, ModalEffect, UiOptions};
pub use janken_types::{Hand, HandParseError, Judgement, Tally, judge};

mod config;
mod opponent;
mod scheduler;

pub use config::{
    AppConfig, ConfigError, DEFAULT_REFRESH_INTERVAL, GameConfig, JankenConfig, Settings,
    config_path,
};
pub use opponent::{DialogFlag, OpponentState};
pub use scheduler::HandScheduler;

const MODAL_POP_DURATION: Duration = Duration::from_millis(180);

// ============================================================================
// ResultDialog - outcome of the last round, on screen until dismissed
// ============================================================================

/// An open result dialog. Existence means the opponent timer is paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultDialog {
    player: Hand,
    opponent: Hand,
    judgement: Judgement,
}

impl ResultDialog {
    pub const TITLE: &'static str = "勝敗の結果";
    pub const ACTION: &'static str = "OK";

    #[must_use]
    pub fn player(&self) -> Hand {
        self.player
    }

    #[must_use]
    pub fn opponent(&self) -> Hand {
        self.opponent
    }

    #[must_use]
    pub fn judgement(&self) -> Judgement {
        self.judgement
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.judgement.result()
    }
}

// ============================================================================
// App - the game controller
// ============================================================================

pub struct App {
    opponent: OpponentState,
    scheduler: HandScheduler,
    rng: SmallRng,
    dialog: Option<ResultDialog>,
    tally: Tally,
    /// Button under the cursor.
    focus: Hand,
    ui_options: UiOptions,
    modal_effect: Option<ModalEffect>,
    last_frame: Instant,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, SmallRng::from_os_rng())
    }

    /// Deterministic opponent, for tests and replays.
    #[must_use]
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        Self::with_rng(settings, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(settings: Settings, rng: SmallRng) -> Self {
        Self {
            opponent: OpponentState::new(settings.initial_hand),
            scheduler: HandScheduler::new(settings.refresh_interval),
            rng,
            dialog: None,
            tally: Tally::default(),
            focus: Hand::Rock,
            ui_options: settings.ui_options,
            modal_effect: None,
            last_frame: Instant::now(),
            should_quit: false,
        }
    }

    fn dialog_flag(&self) -> DialogFlag {
        DialogFlag::from(self.dialog.is_some())
    }

    // ------------------------------------------------------------------------
    // Opponent timer
    // ------------------------------------------------------------------------

    /// Start (or resume) the opponent timer.
    pub fn start(&mut self) -> bool {
        self.start_at(Instant::now())
    }

    pub fn start_at(&mut self, now: Instant) -> bool {
        let flag = self.dialog_flag();
        self.scheduler.start(now, flag)
    }

    /// Advance time-driven state. Called once per frame.
    pub fn tick(&mut self) -> Option<Hand> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<Hand> {
        let flag = self.dialog_flag();
        self.scheduler
            .poll(now, &mut self.opponent, flag, &mut self.rng)
    }

    #[must_use]
    pub fn opponent(&self) -> &OpponentState {
        &self.opponent
    }

    #[must_use]
    pub fn opponent_hand(&self) -> Hand {
        self.opponent.hand()
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        self.scheduler.interval()
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.scheduler.is_armed()
    }

    // ------------------------------------------------------------------------
    // Rounds
    // ------------------------------------------------------------------------

    /// Throw `hand` against the opponent's current hand and open the result
    /// dialog. Ignored while a dialog is already open.
    pub fn play(&mut self, hand: Hand) -> Option<Judgement> {
        if self.dialog.is_some() {
            return None;
        }

        let opponent = self.opponent.hand();
        let judgement = judge(hand, opponent);
        self.tally.record(judgement);
        self.dialog = Some(ResultDialog {
            player: hand,
            opponent,
            judgement,
        });
        self.scheduler.stop();
        if !self.ui_options.reduced_motion {
            self.modal_effect = Some(ModalEffect::pop_scale(MODAL_POP_DURATION));
            self.last_frame = Instant::now();
        }

        info!(
            player = %hand,
            opponent = %opponent,
            judgement = judgement.as_str(),
            rounds = self.tally.rounds(),
            "Round played"
        );
        Some(judgement)
    }

    /// Play the button under the cursor.
    pub fn play_focused(&mut self) -> Option<Judgement> {
        self.play(self.focus)
    }

    /// Close the result dialog and resume the opponent timer.
    pub fn dismiss_dialog(&mut self) -> bool {
        self.dismiss_dialog_at(Instant::now())
    }

    pub fn dismiss_dialog_at(&mut self, now: Instant) -> bool {
        if self.dialog.take().is_none() {
            return false;
        }
        self.modal_effect = None;
        self.start_at(now);
        info!("Result dialog dismissed");
        true
    }

    #[must_use]
    pub fn dialog(&self) -> Option<&ResultDialog> {
        self.dialog.as_ref()
    }

    #[must_use]
    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    #[must_use]
    pub fn tally(&self) -> Tally {
        self.tally
    }

    // ------------------------------------------------------------------------
    // Button cursor
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn focused_hand(&self) -> Hand {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = Hand::from_index(self.focus_index() + 1);
    }

    pub fn focus_prev(&mut self) {
        self.focus = Hand::from_index(self.focus_index() + Hand::ALL.len() - 1);
    }

    fn focus_index(&self) -> usize {
        Hand::ALL
            .iter()
            .position(|hand| *hand == self.focus)
            .unwrap_or(0)
    }

    // ------------------------------------------------------------------------
    // UI plumbing
    // ------------------------------------------------------------------------

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    /// Get elapsed time since last frame and update timing.
    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    /// Get mutable reference to modal effect for UI processing.
    pub fn modal_effect_mut(&mut self) -> Option<&mut ModalEffect> {
        self.modal_effect.as_mut()
    }

    pub fn clear_modal_effect(&mut self) {
        self.modal_effect = None;
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests;

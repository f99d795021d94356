//! Unit tests for the engine crate.

use std::time::{Duration, Instant};

use super::*;

const INTERVAL: Duration = Duration::from_millis(100);

fn test_settings() -> Settings {
    Settings {
        refresh_interval: INTERVAL,
        initial_hand: Hand::Rock,
        ui_options: UiOptions::default(),
    }
}

fn test_app() -> App {
    App::with_seed(test_settings(), 42)
}

/// Drive the app through `steps` intervals starting at `from`.
fn run_ticks(app: &mut App, from: Instant, steps: u32) -> Instant {
    let mut now = from;
    for _ in 0..steps {
        now += INTERVAL;
        app.tick_at(now);
    }
    now
}

#[test]
fn new_app_shows_initial_hand_and_is_idle() {
    let settings = Settings {
        initial_hand: Hand::Paper,
        ..test_settings()
    };
    let app = App::with_seed(settings, 1);
    assert_eq!(app.opponent_hand(), Hand::Paper);
    assert!(!app.is_refreshing());
    assert!(!app.is_dialog_open());
    assert_eq!(app.tally().rounds(), 0);
}

#[test]
fn tick_refreshes_opponent_after_start() {
    let mut app = test_app();
    let t0 = Instant::now();
    assert!(app.start_at(t0));

    run_ticks(&mut app, t0, 5);
    assert_eq!(app.opponent().revision(), 5);
}

#[test]
fn tick_before_start_does_nothing() {
    let mut app = test_app();
    run_ticks(&mut app, Instant::now(), 5);
    assert_eq!(app.opponent().revision(), 0);
}

#[test]
fn play_judges_against_current_opponent() {
    let mut app = test_app();
    let t0 = Instant::now();
    app.start_at(t0);
    run_ticks(&mut app, t0, 3);

    let opponent = app.opponent_hand();
    let player = opponent.beats();
    let judgement = app.play(player);

    assert_eq!(judgement, Some(Judgement::Lose));
    let dialog = app.dialog().expect("dialog open");
    assert_eq!(dialog.player(), player);
    assert_eq!(dialog.opponent(), opponent);
    assert_eq!(dialog.judgement(), Judgement::Lose);
    assert_eq!(dialog.message(), dialog.judgement().result());
}

#[test]
fn play_with_winning_hand_wins() {
    let mut app = test_app();
    // Opponent starts on rock; paper wins.
    assert_eq!(app.play(Hand::Paper), Some(Judgement::Win));
    assert_eq!(app.dialog().map(ResultDialog::message), Some("勝ち"));
}

#[test]
fn play_records_tally() {
    let mut app = test_app();
    let t0 = Instant::now();

    app.play(Hand::Paper);
    app.dismiss_dialog_at(t0);
    app.play(Hand::Rock);
    app.dismiss_dialog_at(t0);

    let tally = app.tally();
    assert_eq!(tally.rounds(), 2);
    assert_eq!(tally.wins, 1);
    assert_eq!(tally.draws, 1);
}

#[test]
fn play_is_ignored_while_dialog_open() {
    let mut app = test_app();
    assert!(app.play(Hand::Paper).is_some());
    assert!(app.play(Hand::Scissors).is_none());
    assert_eq!(app.tally().rounds(), 1);
    assert_eq!(app.dialog().map(ResultDialog::player), Some(Hand::Paper));
}

#[test]
fn opponent_frozen_while_dialog_open() {
    let mut app = test_app();
    let t0 = Instant::now();
    app.start_at(t0);
    let t1 = run_ticks(&mut app, t0, 2);

    app.play(Hand::Rock);
    let frozen = *app.opponent();

    // Restart attempts are refused while the dialog is up.
    assert!(!app.start_at(t1));
    run_ticks(&mut app, t1, 50);

    assert_eq!(*app.opponent(), frozen);
    assert!(!app.is_refreshing());
}

#[test]
fn dismiss_resumes_refresh() {
    let mut app = test_app();
    let t0 = Instant::now();
    app.start_at(t0);
    let t1 = run_ticks(&mut app, t0, 2);

    app.play(Hand::Scissors);
    let before = app.opponent().revision();

    assert!(app.dismiss_dialog_at(t1));
    assert!(!app.is_dialog_open());
    assert!(app.is_refreshing());

    run_ticks(&mut app, t1, 4);
    assert_eq!(app.opponent().revision(), before + 4);
}

#[test]
fn dismiss_without_dialog_is_noop() {
    let mut app = test_app();
    assert!(!app.dismiss_dialog_at(Instant::now()));
    assert!(!app.is_refreshing());
}

#[test]
fn rapid_open_close_keeps_single_chain() {
    let mut app = test_app();
    let t0 = Instant::now();
    app.start_at(t0);

    for _ in 0..5 {
        app.play(Hand::Rock);
        app.dismiss_dialog_at(t0);
        // A second start must not add another chain.
        assert!(!app.start_at(t0));
    }

    // One interval produces exactly one refresh.
    app.tick_at(t0 + INTERVAL);
    assert_eq!(app.opponent().revision(), 1);
}

#[test]
fn play_starts_modal_effect_unless_reduced_motion() {
    let mut app = test_app();
    app.play(Hand::Rock);
    assert!(app.modal_effect_mut().is_some());

    let settings = Settings {
        ui_options: UiOptions {
            reduced_motion: true,
            ..UiOptions::default()
        },
        ..test_settings()
    };
    let mut calm = App::with_seed(settings, 3);
    calm.play(Hand::Rock);
    assert!(calm.modal_effect_mut().is_none());
}

#[test]
fn dismiss_clears_modal_effect() {
    let mut app = test_app();
    app.play(Hand::Rock);
    app.dismiss_dialog_at(Instant::now());
    assert!(app.modal_effect_mut().is_none());
}

#[test]
fn focus_wraps_in_button_order() {
    let mut app = test_app();
    assert_eq!(app.focused_hand(), Hand::Rock);
    app.focus_next();
    assert_eq!(app.focused_hand(), Hand::Scissors);
    app.focus_next();
    assert_eq!(app.focused_hand(), Hand::Paper);
    app.focus_next();
    assert_eq!(app.focused_hand(), Hand::Rock);
    app.focus_prev();
    assert_eq!(app.focused_hand(), Hand::Paper);
}

#[test]
fn play_focused_uses_cursor() {
    let mut app = test_app();
    app.focus_prev();
    app.play_focused();
    assert_eq!(app.dialog().map(ResultDialog::player), Some(Hand::Paper));
}

#[test]
fn quit_request_is_sticky() {
    let mut app = test_app();
    assert!(!app.should_quit());
    app.request_quit();
    assert!(app.should_quit());
}

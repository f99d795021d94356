//! Input handling for Janken TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use janken_engine::{App, Hand};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and queues them for the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input into `app`. Returns `true` when the player asked to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, &ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, ev: &Event) -> bool {
    let Event::Key(key) = ev else {
        return false;
    };
    // Auto-repeat only moves focus; playing and dismissing need a fresh press.
    let repeat = match key.kind {
        KeyEventKind::Press => false,
        KeyEventKind::Repeat => true,
        KeyEventKind::Release => return false,
    };

    if is_quit(key) {
        debug!("Quit requested");
        app.request_quit();
        return true;
    }

    if app.is_dialog_open() {
        if !repeat
            && matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ' | 'o' | 'O')
            )
        {
            app.dismiss_dialog();
        }
        return false;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.focus_prev(),
        KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') => app.focus_next(),
        _ if repeat => {}
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.play_focused();
        }
        KeyCode::Char(c) => {
            if let Some(hand) = hand_for_key(c) {
                app.play(hand);
            }
        }
        _ => {}
    }
    false
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char('q') => key.modifiers.is_empty(),
        _ => false,
    }
}

/// Key bindings for the three buttons: mnemonic, Japanese initial, position.
fn hand_for_key(c: char) -> Option<Hand> {
    match c.to_ascii_lowercase() {
        'r' | 'g' | '1' => Some(Hand::Rock),
        's' | 'c' | '2' => Some(Hand::Scissors),
        'p' | '3' => Some(Hand::Paper),
        _ => None,
    }
}

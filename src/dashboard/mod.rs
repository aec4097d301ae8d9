//! Dashboard runtime.
//!
//! Wires three threads around two channels:
//!
//! - the **tick engine** thread owns [`EngineState`] and is the only
//!   mutator of counters; it publishes frame snapshots and state-change
//!   events
//! - the **input** thread forwards crossterm key presses and resizes
//! - the **render** loop (the caller's thread) owns the terminal,
//!   consumes the single event channel, and draws
//!
//! # Architecture
//!
//! Submodules:
//! - `event`: channel vocabulary (`DashboardEvent`, `EngineCommand`)
//! - `keys`: platform-resolved quit chord
//! - `input`: key event to intent mapping
//! - `layout`: pure panel geometry
//! - `view` / `render/`: render-side state and the three panels
//! - `terminal`: raw-mode/alternate-screen RAII guard

pub mod event;
pub mod input;
pub mod keys;
pub mod layout;
pub mod render;
pub mod terminal;
pub mod view;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};

use crate::color::ColorPair;
use crate::engine::{EngineState, TICK_PERIOD};
use event::{DashboardError, DashboardEvent, EngineCommand};
use input::InputAction;
use keys::QuitKey;
use terminal::TerminalGuard;
use view::DashboardView;

/// How long the input thread waits per poll before rechecking shutdown.
const INPUT_POLL: Duration = Duration::from_millis(100);

/// Summary of a finished session, printed once the terminal is restored.
#[derive(Debug, Clone, Copy)]
pub struct SessionReport {
    /// Timer fires over the session lifetime
    pub steps: u64,
    /// Pairs marked in the current cycle at quit time
    pub seen: usize,
    /// Pair displayed by the final tick
    pub last_pair: Option<ColorPair>,
}

/// Run the dashboard until the quit chord arrives or a render step fails.
pub fn run() -> Result<SessionReport> {
    let quit_key = QuitKey::for_platform();
    tracing::info!(quit = quit_key.label(), "starting dashboard");

    let mut terminal = TerminalGuard::enter()?;

    let (event_tx, event_rx) = mpsc::channel();
    let (command_tx, command_rx) = mpsc::channel();
    let running = Arc::new(AtomicBool::new(true));

    let engine_thread = thread::spawn({
        let events = event_tx.clone();
        move || engine_loop(command_rx, events)
    });
    let input_thread = thread::spawn({
        let events = event_tx;
        let running = Arc::clone(&running);
        move || input_loop(events, running)
    });

    let outcome = event_loop(&mut terminal, &event_rx, &command_tx, quit_key);

    running.store(false, Ordering::Relaxed);
    let _ = command_tx.send(EngineCommand::Shutdown);
    let _ = engine_thread.join();
    let _ = input_thread.join();

    outcome
}

/// The render loop: consume dashboard events, draw after each.
///
/// Key presses never touch state here; they are forwarded to the engine,
/// which answers with the matching state-change event.
fn event_loop(
    terminal: &mut TerminalGuard,
    events: &Receiver<DashboardEvent>,
    commands: &Sender<EngineCommand>,
    quit_key: QuitKey,
) -> Result<SessionReport> {
    let mut view = DashboardView::new(quit_key);
    terminal
        .draw(|frame| view.render(frame))
        .context("initial render failed")?;

    loop {
        let event = events.recv().map_err(|_| DashboardError::EngineGone)?;
        match event {
            DashboardEvent::Input(key) => {
                match input::action_for(&key, quit_key) {
                    InputAction::Quit => {
                        tracing::info!("quit chord received");
                        break;
                    }
                    InputAction::TogglePause => send(commands, EngineCommand::TogglePause)?,
                    InputAction::Nudge(dx, dy) => send(commands, EngineCommand::Nudge(dx, dy))?,
                    InputAction::Ignored => {}
                }
                continue;
            }
            DashboardEvent::Resize => {}
            update => view.apply(update),
        }
        terminal
            .draw(|frame| view.render(frame))
            .context("render failed")?;
    }

    Ok(match view.last_frame() {
        Some(frame) => SessionReport {
            steps: frame.step,
            seen: frame.visited.count(),
            last_pair: Some(frame.pair),
        },
        None => SessionReport {
            steps: 0,
            seen: 0,
            last_pair: None,
        },
    })
}

fn send(commands: &Sender<EngineCommand>, command: EngineCommand) -> Result<()> {
    commands
        .send(command)
        .map_err(|_| DashboardError::EngineGone.into())
}

/// Tick engine thread body.
///
/// Deadline loop: wait for a command until the next tick instant, then
/// fire the tick. Ticks stay on a fixed grid; a command arriving between
/// ticks does not delay the next one.
fn engine_loop(commands: Receiver<EngineCommand>, events: Sender<DashboardEvent>) {
    tracing::debug!("tick engine started");
    let mut state = EngineState::new();
    let mut next_tick = Instant::now() + TICK_PERIOD;

    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());
        match commands.recv_timeout(wait) {
            Ok(EngineCommand::TogglePause) => {
                let paused = state.toggle_pause();
                if events.send(DashboardEvent::Paused(paused)).is_err() {
                    break;
                }
            }
            Ok(EngineCommand::Nudge(dx, dy)) => {
                let offset = state.nudge(dx, dy);
                if events.send(DashboardEvent::OffsetMoved(offset)).is_err() {
                    break;
                }
            }
            Ok(EngineCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {
                next_tick += TICK_PERIOD;
                if let Some(frame) = state.tick(Instant::now(), chrono::Local::now()) {
                    if events.send(DashboardEvent::Frame(frame)).is_err() {
                        break;
                    }
                }
            }
        }
    }
    tracing::debug!("tick engine stopped");
}

/// Input thread body: poll so the shutdown flag is observed promptly.
fn input_loop(events: Sender<DashboardEvent>, running: Arc<AtomicBool>) {
    while running.load(Ordering::Relaxed) {
        match crossterm::event::poll(INPUT_POLL) {
            Ok(false) => {}
            Ok(true) => match crossterm::event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if events.send(DashboardEvent::Input(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if events.send(DashboardEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(%err, "terminal input failed");
                    break;
                }
            },
            Err(err) => {
                tracing::error!(%err, "terminal poll failed");
                break;
            }
        }
    }
}

//! Channel vocabulary between the engine, input, and render threads.

use crossterm::event::KeyEvent;

use crate::engine::{FrameSnapshot, PanelOffset};

/// Commands sent from the render loop to the tick engine thread.
///
/// The engine is the sole mutator of counter state; keyboard intent is
/// forwarded here instead of touching the state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineCommand {
    /// Flip the pause flag
    TogglePause,
    /// Move the ticker panel offset by (dx, dy)
    Nudge(i32, i32),
    /// Stop the engine thread
    Shutdown,
}

/// Events consumed by the single render loop.
///
/// The tick thread publishes state updates, the input thread forwards
/// terminal events, and exactly one consumer draws.
#[derive(Debug)]
pub enum DashboardEvent {
    /// A tick advanced the engine; full redraw from this snapshot
    Frame(FrameSnapshot),
    /// The pause flag changed
    Paused(bool),
    /// The ticker panel offset changed
    OffsetMoved(PanelOffset),
    /// A key was pressed
    Input(KeyEvent),
    /// The terminal was resized
    Resize,
}

/// Fatal dashboard failures.
///
/// Everything here terminates the process; there is no retry path.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("tick engine stopped unexpectedly")]
    EngineGone,
}

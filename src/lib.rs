//! blinken - tick-driven terminal dashboard
//!
//! Cycles through ANSI (foreground, background) color pairs on a fixed
//! 6 Hz tick, marks every displayed pair in an 8x8 grid, and renders
//! three panels: the seen grid, a scrolling colorized timestamp ticker,
//! and a one-line status bar.
//!
//! The `engine` module holds all mutable state and the pair-cycle
//! algorithm and is fully testable without a terminal; `dashboard` wires
//! it to a ratatui surface.

pub mod color;
pub mod dashboard;
pub mod engine;

pub use color::{colorize, ColorPair};
pub use dashboard::{run, SessionReport};
pub use engine::EngineState;

//! Tick engine: the pair cycle and its state.
//!
//! The engine owns every mutable counter in the program and runs on its
//! own thread; the dashboard only ever sees [`FrameSnapshot`] values.
//!
//! - `cycle`: pure pair-advance step
//! - `visited`: 8x8 displayed-pair grid
//! - `state`: `EngineState` and per-tick snapshots

pub mod cycle;
pub mod state;
pub mod visited;

pub use cycle::{advance, Advance, RESTART_PAIR};
pub use state::{EngineState, FrameSnapshot, PanelOffset, STAMP_FORMAT, TICK_HZ, TICK_PERIOD};
pub use visited::VisitedGrid;

//! Engine state management.
//!
//! Every mutable counter in the program (the color indices, the pause
//! flag, the panel offset, the tick counter) lives here as a field of
//! `EngineState`, mutated exclusively by the tick thread. Each unpaused
//! tick produces an immutable [`FrameSnapshot`] for the render side.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::color::ColorPair;
use crate::engine::cycle;
use crate::engine::visited::VisitedGrid;

/// Ticks per second.
pub const TICK_HZ: u32 = 6;

/// Fixed tick period (~166 ms).
pub const TICK_PERIOD: Duration = Duration::from_nanos(1_000_000_000 / TICK_HZ as u64);

/// Wall-clock format for ticker lines, nanosecond precision with offset.
pub const STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// Screen-position offset for the ticker panel, in cells.
///
/// Mutated by arrow keys, unbounded by design; the layout clamps the
/// resulting rectangle into the terminal at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelOffset {
    pub dx: i32,
    pub dy: i32,
}

/// Immutable per-tick view handed to the render loop.
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    /// The pair displayed this tick
    pub pair: ColorPair,
    /// Copy of the visited grid after marking `pair`
    pub visited: VisitedGrid,
    /// Total timer fires since startup, including paused ones
    pub step: u64,
    /// Measured gap since the previous unpaused tick (None on the first)
    pub tick_gap: Option<Duration>,
    /// Current ticker panel offset
    pub offset: PanelOffset,
    /// Wall-clock timestamp for the ticker line
    pub stamp: String,
}

/// Central state for the tick engine.
#[derive(Debug)]
pub struct EngineState {
    /// Pair displayed by the most recent unpaused tick
    pair: ColorPair,
    /// Pairs displayed since the last cycle wrap
    visited: VisitedGrid,
    /// Whether ticks are currently ignored
    paused: bool,
    /// Ticker panel offset
    offset: PanelOffset,
    /// Timer fires since startup (keeps counting while paused)
    ticks: u64,
    /// Instant of the previous unpaused tick
    last_tick: Option<Instant>,
}

impl EngineState {
    /// Engine at startup: seeded at the high pair, nothing visited.
    ///
    /// The seed pair itself is never marked; the first tick wraps and
    /// lands on the cycle's restart pair.
    pub fn new() -> Self {
        Self {
            pair: ColorPair::new(7, 7),
            visited: VisitedGrid::new(),
            paused: false,
            offset: PanelOffset::default(),
            ticks: 0,
            last_tick: None,
        }
    }

    /// Whether ticks are currently ignored.
    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Current ticker panel offset.
    pub fn offset(&self) -> PanelOffset {
        self.offset
    }

    /// Handle one timer fire.
    ///
    /// The step counter always advances; while paused nothing else does
    /// and no snapshot is produced. `now` feeds the measured tick rate,
    /// `wall` the ticker timestamp.
    pub fn tick(&mut self, now: Instant, wall: DateTime<Local>) -> Option<FrameSnapshot> {
        self.ticks += 1;
        if self.paused {
            return None;
        }

        let step = cycle::advance(self.pair);
        if step.cycle_complete {
            tracing::debug!(ticks = self.ticks, "pair cycle complete, clearing grid");
            self.visited.clear();
        }
        self.pair = step.pair;
        self.visited.mark(self.pair);

        let tick_gap = self.last_tick.map(|prev| now.duration_since(prev));
        self.last_tick = Some(now);

        Some(FrameSnapshot {
            pair: self.pair,
            visited: self.visited,
            step: self.ticks,
            tick_gap,
            offset: self.offset,
            stamp: wall.format(STAMP_FORMAT).to_string(),
        })
    }

    /// Toggle the pause flag, returning the new value.
    ///
    /// Resuming also forgets the last tick instant so the first measured
    /// gap after a pause is not the pause duration.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        if !self.paused {
            self.last_tick = None;
        }
        self.paused
    }

    /// Move the ticker panel offset, returning the new value.
    pub fn nudge(&mut self, dx: i32, dy: i32) -> PanelOffset {
        self.offset.dx = self.offset.dx.saturating_add(dx);
        self.offset.dy = self.offset.dy.saturating_add(dy);
        self.offset
    }

    /// Number of pairs displayed since the last cycle wrap.
    pub fn seen(&self) -> usize {
        self.visited.count()
    }

    /// Pair displayed by the most recent unpaused tick.
    pub fn pair(&self) -> ColorPair {
        self.pair
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

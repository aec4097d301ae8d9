//! Render-side dashboard state.
//!
//! The render loop is the only thread that touches the screen, and this
//! is the only state it keeps: the last engine snapshot, the pause flag
//! and offset as last reported, and the bounded ticker scrollback. All of
//! it is derived from channel events; none of it feeds back into the
//! engine.

use std::collections::VecDeque;

use ratatui::Frame;

use super::event::DashboardEvent;
use super::keys::QuitKey;
use super::layout;
use super::render::ticker::TickerEntry;
use super::render::{grid, status, ticker};
use crate::engine::{FrameSnapshot, PanelOffset};

/// Maximum retained ticker lines.
const SCROLLBACK: usize = 256;

/// Everything the render loop knows.
pub struct DashboardView {
    /// Snapshot from the most recent tick
    last: Option<FrameSnapshot>,
    /// Ticker scrollback, oldest first
    log: VecDeque<TickerEntry>,
    /// Pause flag as last reported by the engine
    paused: bool,
    /// Offset as last reported by the engine
    offset: PanelOffset,
    /// Resolved quit chord, for the status hints
    quit_key: QuitKey,
}

impl DashboardView {
    pub fn new(quit_key: QuitKey) -> Self {
        Self {
            last: None,
            log: VecDeque::with_capacity(SCROLLBACK),
            paused: false,
            offset: PanelOffset::default(),
            quit_key,
        }
    }

    /// Fold an engine update into the view. `Input` and `Resize` carry no
    /// view state and pass through untouched.
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Frame(snapshot) => {
                self.offset = snapshot.offset;
                self.log.push_back(TickerEntry {
                    stamp: snapshot.stamp.clone(),
                    pair: snapshot.pair,
                });
                if self.log.len() > SCROLLBACK {
                    self.log.pop_front();
                }
                self.last = Some(snapshot);
            }
            DashboardEvent::Paused(paused) => self.paused = paused,
            DashboardEvent::OffsetMoved(offset) => self.offset = offset,
            DashboardEvent::Input(_) | DashboardEvent::Resize => {}
        }
    }

    /// Draw the three panels.
    pub fn render(&self, frame: &mut Frame) {
        let rects = layout::compute(frame.area(), self.offset);

        grid::render(frame, rects.grid, self.last.as_ref().map(|s| &s.visited));
        ticker::render(frame, rects.ticker, &self.log);
        status::render(
            frame,
            rects.status,
            &status::StatusInfo {
                platform: std::env::consts::OS,
                tick_gap: self.last.as_ref().and_then(|s| s.tick_gap),
                step: self.last.as_ref().map_or(0, |s| s.step),
                offset: self.offset,
                paused: self.paused,
                quit_label: self.quit_key.label(),
            },
        );
    }

    /// Snapshot from the most recent tick, if any landed yet.
    pub fn last_frame(&self) -> Option<&FrameSnapshot> {
        self.last.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorPair;
    use crate::engine::{EngineState, VisitedGrid};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn snapshot(pair: ColorPair) -> FrameSnapshot {
        let mut visited = VisitedGrid::new();
        visited.mark(pair);
        FrameSnapshot {
            pair,
            visited,
            step: 1,
            tick_gap: None,
            offset: PanelOffset::default(),
            stamp: "2026-08-05 10:00:00.000000000 +0000".to_string(),
        }
    }

    fn rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.cell((x, y)).map_or(" ", |c| c.symbol()).to_string())
                    .collect()
            })
            .collect()
    }

    fn draw(view: &DashboardView) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| view.render(frame)).unwrap();
        rows(&terminal)
    }

    #[test]
    fn frame_event_marks_the_grid_cell() {
        let mut view = DashboardView::new(QuitKey::CtrlC);
        view.apply(DashboardEvent::Frame(snapshot(ColorPair::new(0, 1))));

        let rows = draw(&view);
        // Grid interior starts at (1,1); pair (fg=0, bg=1) sits at
        // column 0, row 1 of the grid.
        assert_eq!(rows[2].chars().nth(1), Some('\u{25ae}'));
        assert!(rows[0].contains("seen"));
    }

    #[test]
    fn frame_event_appends_a_ticker_line() {
        let mut view = DashboardView::new(QuitKey::CtrlC);
        view.apply(DashboardEvent::Frame(snapshot(ColorPair::new(2, 3))));

        let rows = draw(&view);
        let all = rows.join("\n");
        assert!(all.contains("2026-08-05 10:00:00.000000000 +0000"));
        assert!(all.contains("time"));
    }

    #[test]
    fn paused_event_shows_in_the_status_line() {
        let mut view = DashboardView::new(QuitKey::CtrlC);
        view.apply(DashboardEvent::Paused(true));

        let rows = draw(&view);
        assert!(rows[23].contains("paused"));

        view.apply(DashboardEvent::Paused(false));
        let rows = draw(&view);
        assert!(!rows[23].contains("paused"));
    }

    #[test]
    fn status_line_names_the_quit_chord() {
        let view = DashboardView::new(QuitKey::CtrlW);
        let rows = draw(&view);
        assert!(rows[23].contains("ctrl+w quit"));
    }

    #[test]
    fn offset_event_moves_the_ticker_panel() {
        let mut view = DashboardView::new(QuitKey::CtrlC);
        view.apply(DashboardEvent::OffsetMoved(PanelOffset { dx: 0, dy: 3 }));

        let rows = draw(&view);
        // Ticker border now starts three rows down.
        assert!(!rows[0].contains("time"));
        assert!(rows[3].contains("time"));
    }

    #[test]
    fn scrollback_is_bounded() {
        let mut view = DashboardView::new(QuitKey::CtrlC);
        for _ in 0..(SCROLLBACK + 50) {
            view.apply(DashboardEvent::Frame(snapshot(ColorPair::new(0, 1))));
        }
        assert_eq!(view.log.len(), SCROLLBACK);
    }

    #[test]
    fn live_engine_frames_render_without_panicking() {
        let mut engine = EngineState::new();
        let mut view = DashboardView::new(QuitKey::CtrlC);
        for _ in 0..100 {
            if let Some(frame) = engine.tick(Instant::now(), chrono::Local::now()) {
                view.apply(DashboardEvent::Frame(frame));
            }
        }
        let rows = draw(&view);
        assert!(rows.iter().any(|row| row.contains("\u{25ae}")));
    }
}

//! Timestamp ticker panel.
//!
//! Scrolling log of one timestamp line per tick, each drawn in the color
//! pair that tick displayed. Autoscrolls by keeping the newest lines at
//! the bottom of the panel.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::chrome_style;
use crate::color::ColorPair;

/// One rendered tick in the scrollback.
#[derive(Debug, Clone)]
pub struct TickerEntry {
    /// Wall-clock stamp of the tick
    pub stamp: String,
    /// Pair the tick displayed
    pub pair: ColorPair,
}

/// Render the ticker into `area`, newest entry on the bottom line.
pub fn render(frame: &mut Frame, area: Rect, entries: &VecDeque<TickerEntry>) {
    if area.area() == 0 {
        return;
    }

    let visible = usize::from(area.height.saturating_sub(2));
    let skip = entries.len().saturating_sub(visible);
    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| Line::from(Span::styled(entry.stamp.clone(), entry.pair.style())))
        .collect();

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(chrome_style())
            .title(" time "),
    );
    frame.render_widget(panel, area);
}

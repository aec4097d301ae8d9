//! Seen-grid panel.
//!
//! 8x8 cells, one per (background row, foreground column) pair. A marked
//! cell shows a filled glyph drawn in its own pair's colors; unmarked
//! cells stay blank.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::chrome_style;
use crate::color::{ColorPair, PALETTE_SIZE};
use crate::engine::VisitedGrid;

/// Glyph for a visited pair.
const GLYPH: &str = "\u{25ae}";

/// Render the seen grid into `area`. Draws nothing when the layout
/// collapsed the panel away.
pub fn render(frame: &mut Frame, area: Rect, visited: Option<&VisitedGrid>) {
    if area.area() == 0 {
        return;
    }

    let mut lines = Vec::with_capacity(PALETTE_SIZE as usize);
    for bg in 0..PALETTE_SIZE {
        let mut spans = Vec::with_capacity(PALETTE_SIZE as usize);
        for fg in 0..PALETTE_SIZE {
            let seen = visited.is_some_and(|grid| grid.seen_at(bg, fg));
            if seen {
                spans.push(Span::styled(GLYPH, ColorPair::new(fg, bg).style()));
            } else {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(chrome_style())
            .title(" seen "),
    );
    frame.render_widget(panel, area);
}

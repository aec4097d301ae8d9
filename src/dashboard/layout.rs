//! Panel layout.
//!
//! Pure function from terminal area and ticker offset to the three panel
//! rectangles. Recomputed on every redraw, so terminal resizes and offset
//! changes need no special handling; identical inputs always produce
//! identical rectangles.

use ratatui::layout::Rect;

use crate::engine::PanelOffset;

/// Side length of the seen-grid panel, borders included.
pub const GRID_PANEL_SIZE: u16 = 10;

/// Width of the ticker panel, borders included.
pub const TICKER_WIDTH: u16 = 40;

/// The three panel rectangles. Empty rects mean "do not draw".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRects {
    /// Seen grid, pinned top-left
    pub grid: Rect,
    /// Scrolling timestamp ticker, centered plus offset
    pub ticker: Rect,
    /// Single status line on the bottom row
    pub status: Rect,
}

/// Compute panel rectangles for `area` with the ticker moved by `offset`.
pub fn compute(area: Rect, offset: PanelOffset) -> PanelRects {
    let grid = Rect::new(area.x, area.y, GRID_PANEL_SIZE, GRID_PANEL_SIZE).intersection(area);

    let status = if area.height > 0 {
        Rect::new(area.x, area.bottom() - 1, area.width, 1)
    } else {
        Rect::default()
    };

    let ticker_x = i32::from(area.x) + i32::from(area.width) / 2 - i32::from(TICKER_WIDTH) / 2
        + offset.dx;
    let ticker_y = i32::from(area.y) + offset.dy;
    let ticker = clip_to(area, ticker_x, ticker_y, TICKER_WIDTH, area.height / 2);

    PanelRects {
        grid,
        ticker,
        status,
    }
}

/// Clip a possibly negative-positioned rectangle into `area`.
///
/// Offsets are unbounded, so the requested position can lie anywhere;
/// whatever part still overlaps the terminal is drawn, and a fully
/// offscreen panel collapses to an empty rect.
fn clip_to(area: Rect, x: i32, y: i32, width: u16, height: u16) -> Rect {
    let left = x.max(i32::from(area.x));
    let top = y.max(i32::from(area.y));
    let right = (x + i32::from(width)).min(i32::from(area.right()));
    let bottom = (y + i32::from(height)).min(i32::from(area.bottom()));

    if right <= left || bottom <= top {
        return Rect::default();
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}

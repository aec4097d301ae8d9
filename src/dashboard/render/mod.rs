//! Panel rendering.
//!
//! One module per panel. All chrome (borders, titles, status text) shares
//! the same dimmed styling; content cells take their colors from the pair
//! that produced them.

pub mod grid;
pub mod status;
pub mod ticker;

use ratatui::style::{Color, Style};

/// Style for borders, titles, and status text.
pub(crate) fn chrome_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

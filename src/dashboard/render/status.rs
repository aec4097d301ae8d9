//! Status line.
//!
//! Single bottom row: platform, measured tick rate, step counter, ticker
//! offset, and the pause marker, with the keybinding hints right-aligned.

use std::time::Duration;

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::chrome_style;
use crate::engine::PanelOffset;

/// Everything the status line displays.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Compile-time platform name
    pub platform: &'static str,
    /// Gap between the last two unpaused ticks
    pub tick_gap: Option<Duration>,
    /// Timer fires since startup
    pub step: u64,
    /// Current ticker offset
    pub offset: PanelOffset,
    /// Whether the engine is paused
    pub paused: bool,
    /// Label of the resolved quit chord
    pub quit_label: &'static str,
}

/// Render the status line into `area`.
pub fn render(frame: &mut Frame, area: Rect, info: &StatusInfo) {
    if area.area() == 0 {
        return;
    }

    let stats = Paragraph::new(status_text(info)).style(chrome_style());
    frame.render_widget(stats, area);

    let hints = Paragraph::new(hint_text(info.quit_label))
        .style(chrome_style())
        .alignment(Alignment::Right);
    frame.render_widget(hints, area);
}

/// Compose the left-hand stats text.
fn status_text(info: &StatusInfo) -> String {
    let mut text = format!(
        "{} | tick {} | step {} | dx {} dy {}",
        info.platform,
        format_rate(info.tick_gap),
        info.step,
        info.offset.dx,
        info.offset.dy,
    );
    if info.paused {
        text.push_str(" | paused");
    }
    text
}

/// Compose the right-hand keybinding hints.
fn hint_text(quit_label: &'static str) -> String {
    format!("space pause | arrows move | {} quit", quit_label)
}

/// Format a measured inter-tick gap as a rate.
///
/// `--` before two ticks have landed, `inf` for a zero gap.
fn format_rate(gap: Option<Duration>) -> String {
    match gap {
        None => "--".to_string(),
        Some(gap) if gap.is_zero() => "inf".to_string(),
        Some(gap) => format!("{:.1}/s", 1.0 / gap.as_secs_f64()),
    }
}

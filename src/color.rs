//! Color pair type and colorizing helpers.
//!
//! Centralizes the mapping from palette indices to terminal colors.
//! Provides both ratatui styles (for the dashboard panels) and raw ANSI
//! escape sequences (for plain CLI output such as the exit summary).

use ratatui::style::{Color, Style};

/// Number of colors in the classic ANSI palette slice we cycle through.
pub const PALETTE_SIZE: u8 = 8;

/// Number of valid (foreground, background) combinations per cycle.
///
/// Self-pairs are forbidden, so one full cycle covers the 8x8 grid minus
/// its diagonal.
pub const VALID_PAIRS: usize = (PALETTE_SIZE as usize) * (PALETTE_SIZE as usize - 1);

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// A (foreground, background) pair of ANSI palette indices.
///
/// Both indices are in `[0, PALETTE_SIZE)` when produced by the engine;
/// the type itself does not enforce the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    /// Foreground palette index
    pub fg: u8,
    /// Background palette index
    pub bg: u8,
}

impl ColorPair {
    /// Create a pair from raw palette indices.
    pub const fn new(fg: u8, bg: u8) -> Self {
        Self { fg, bg }
    }

    /// ratatui style selecting this pair's colors.
    ///
    /// `Color::Indexed(0..8)` addresses the same palette entries as the
    /// `30+fg` / `40+bg` escape codes produced by [`colorize`].
    pub fn style(&self) -> Style {
        Style::default()
            .fg(Color::Indexed(self.fg))
            .bg(Color::Indexed(self.bg))
    }
}

/// Wrap `s` in ANSI escapes selecting foreground `30+fg` and background
/// `40+bg`, terminated by a reset.
///
/// Out-of-range indices are passed through unchecked and produce escape
/// sequences outside the SGR color range; callers advancing indices mod
/// [`PALETTE_SIZE`] never hit that case.
pub fn colorize(s: &str, fg: u8, bg: u8) -> String {
    format!("\x1b[3{}m\x1b[4{}m{}{}", fg, bg, s, ANSI_RESET)
}

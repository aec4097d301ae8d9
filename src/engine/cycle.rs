//! The color pair cycle.
//!
//! One pure step function: advance the background index, carry into the
//! foreground index on wrap, and skip forbidden self-pairs. When the skip
//! itself wraps, the cycle has walked every valid combination and restarts
//! from the low pair.

use crate::color::{ColorPair, PALETTE_SIZE};

/// The pair the cycle restarts from after covering every combination.
pub const RESTART_PAIR: ColorPair = ColorPair::new(0, 1);

/// Outcome of a single cycle step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// The next pair to display
    pub pair: ColorPair,
    /// True when this step wrapped past the last valid pair; the caller
    /// resets its visited bookkeeping before marking `pair`.
    pub cycle_complete: bool,
}

/// Advance `pair` by one tick.
///
/// The background index moves fastest; the foreground index advances each
/// time the background wraps. A landing on `fg == bg` skips the background
/// one extra step, and if that skip wraps to zero the whole cycle is
/// complete and restarts at [`RESTART_PAIR`].
pub fn advance(pair: ColorPair) -> Advance {
    let mut bg = (pair.bg + 1) % PALETTE_SIZE;
    let mut fg = pair.fg;

    if bg == 0 {
        fg = (fg + 1) % PALETTE_SIZE;
    }

    if bg == fg {
        bg = (bg + 1) % PALETTE_SIZE;
        if bg == 0 {
            return Advance {
                pair: RESTART_PAIR,
                cycle_complete: true,
            };
        }
    }

    Advance {
        pair: ColorPair::new(fg, bg),
        cycle_complete: false,
    }
}

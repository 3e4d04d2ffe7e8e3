//! Display multiplexer.
//!
//! Eight segment lines are shared across all six digits, so only one
//! segment line may be energised at a time. The multiplexer walks a
//! 16-sub-frame cycle: sub-frames 0..8 pair each segment line with the
//! left three digit positions, 8..16 with the right three. Every digit
//! gets eight sub-frames of dwell per cycle, which keeps brightness
//! even across the display.
//!
//! Driven at roughly 2 kHz; persistence of vision does the rest. Each
//! step is a fixed handful of line writes and must stay that way — an
//! overrun here shows up as flicker and missed button edges.

use crate::display::{DIGIT_COUNT, DisplayBuffer};

/// Number of shared segment drive lines (A..G plus the point).
pub const SEGMENT_LINES: usize = 8;

/// Digit-select lines, one per position.
pub const DIGIT_LINES: usize = DIGIT_COUNT;

const SUB_FRAMES: u8 = 16;
const HALF: usize = DIGIT_LINES / 2;

/// Physical line control issued by the multiplexer on every step.
///
/// Implementations just move GPIO levels; the wiring polarity (segment
/// lines active-low, digit lines active-high) lives behind this trait,
/// not in the multiplexer.
pub trait DisplayLines {
    fn set_segment(&mut self, line: usize, active: bool);
    fn set_digit(&mut self, line: usize, active: bool);
}

/// Sub-frame state machine. The frame counter is kept in range by
/// modulo-16 arithmetic alone; there is no error path.
pub struct Multiplexer {
    frame: u8,
}

impl Multiplexer {
    pub const fn new() -> Self {
        Self { frame: 0 }
    }

    /// Emits the next sub-frame.
    ///
    /// Drops the previous segment line, advances the counter, parks the
    /// inactive half of the digit lines, drives the active half from
    /// the frame's bits for the new segment line, then energises it.
    pub fn step(&mut self, frame_buf: &DisplayBuffer, lines: &mut impl DisplayLines) {
        lines.set_segment(self.frame as usize % SEGMENT_LINES, false);

        self.frame = (self.frame + 1) % SUB_FRAMES;
        let segment_line = self.frame as usize % SEGMENT_LINES;
        let (active, parked) = if self.frame < SUB_FRAMES / 2 {
            (0, HALF)
        } else {
            (HALF, 0)
        };

        for offset in 0..HALF {
            lines.set_digit(parked + offset, false);
            let digit = active + offset;
            lines.set_digit(digit, frame_buf.pattern(digit) & (1 << segment_line) != 0);
        }

        lines.set_segment(segment_line, true);
    }
}

impl Default for Multiplexer {
    fn default() -> Self {
        Self::new()
    }
}

//! Six-digit frame buffer and the render pass.
//!
//! The render pass runs every couple of seconds, alternating between
//! the date and time layouts. It projects the GMT state through the
//! active timezone offset, encodes six digits and replaces the frame
//! wholesale; the multiplexer then reads the frame bit by bit at the
//! drive rate.

use crate::clock::ClockState;
use crate::segment::{self, NineStyle, SEPARATOR, SegmentPattern};
use crate::timezone;

/// Number of physical digit positions, left to right.
pub const DIGIT_COUNT: usize = 6;

/// What the render pass shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// `DD.MM.YY`
    Date,
    /// `HH.MM.SS`
    Time,
}

/// One rendered frame: a segment pattern per digit position.
///
/// Written wholesale by the render pass, read per-position by the
/// multiplexer. Has no identity beyond its current contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayBuffer([SegmentPattern; DIGIT_COUNT]);

impl DisplayBuffer {
    pub const fn blank() -> Self {
        Self([segment::BLANK; DIGIT_COUNT])
    }

    pub const fn new(patterns: [SegmentPattern; DIGIT_COUNT]) -> Self {
        Self(patterns)
    }

    /// Pattern at a digit position, 0 = leftmost.
    pub fn pattern(&self, position: usize) -> SegmentPattern {
        self.0[position]
    }
}

/// Renders `state` into a fresh frame for `mode`.
///
/// Hours and the date come from the timezone projection; minutes and
/// seconds are identical in GMT and local time and are taken as stored.
/// The units digit of the first two fields carries the separator point,
/// the year is shown as its last two digits.
pub fn render(state: &ClockState, mode: DisplayMode, nine: NineStyle) -> DisplayBuffer {
    let local = timezone::project(state, state.timezone_offset);

    let fields: [(u8, bool); 3] = match mode {
        DisplayMode::Date => [
            (local.day, true),
            (local.month, true),
            ((local.year % 100) as u8, false),
        ],
        DisplayMode::Time => [
            (local.hours, true),
            (state.minutes, true),
            (state.seconds, false),
        ],
    };

    let mut frame = [segment::BLANK; DIGIT_COUNT];
    for (i, &(value, separator)) in fields.iter().enumerate() {
        frame[2 * i] = segment::encode((value / 10) % 10, nine);
        frame[2 * i + 1] =
            segment::encode(value % 10, nine) | if separator { SEPARATOR } else { 0 };
    }
    DisplayBuffer(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::encode;

    const NINE: NineStyle = NineStyle::Open;

    fn enc(digit: u8) -> SegmentPattern {
        encode(digit, NINE)
    }

    #[test]
    fn time_layout() {
        let state = ClockState::new(2013, 7, 26, 12, 34, 56, 0);
        let frame = render(&state, DisplayMode::Time, NINE);
        let expected = [
            enc(1),
            enc(2) | SEPARATOR,
            enc(3),
            enc(4) | SEPARATOR,
            enc(5),
            enc(6),
        ];
        assert_eq!(frame, DisplayBuffer::new(expected));
    }

    #[test]
    fn date_layout() {
        let state = ClockState::new(2013, 7, 26, 12, 34, 56, 0);
        let frame = render(&state, DisplayMode::Date, NINE);
        let expected = [
            enc(2),
            enc(6) | SEPARATOR,
            enc(0),
            enc(7) | SEPARATOR,
            enc(1),
            enc(3),
        ];
        assert_eq!(frame, DisplayBuffer::new(expected));
    }

    #[test]
    fn time_mode_applies_offset_to_hours_only() {
        let state = ClockState::new(2013, 7, 26, 23, 5, 0, 1);
        let frame = render(&state, DisplayMode::Time, NINE);
        // 23:05 GMT displays as 00:05 local.
        assert_eq!(frame.pattern(0), enc(0));
        assert_eq!(frame.pattern(1), enc(0) | SEPARATOR);
        assert_eq!(frame.pattern(2), enc(0));
        assert_eq!(frame.pattern(3), enc(5) | SEPARATOR);
    }

    #[test]
    fn date_mode_rolls_with_offset() {
        let state = ClockState::new(2013, 6, 30, 23, 5, 0, 1);
        let frame = render(&state, DisplayMode::Date, NINE);
        // 23:05 GMT on June 30th is already July 1st local.
        assert_eq!(frame.pattern(0), enc(0));
        assert_eq!(frame.pattern(1), enc(1) | SEPARATOR);
        assert_eq!(frame.pattern(2), enc(0));
        assert_eq!(frame.pattern(3), enc(7) | SEPARATOR);
    }

    #[test]
    fn blank_frame() {
        let frame = DisplayBuffer::blank();
        for position in 0..DIGIT_COUNT {
            assert_eq!(frame.pattern(position), segment::BLANK);
        }
    }
}

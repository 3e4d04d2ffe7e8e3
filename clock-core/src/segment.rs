//! Seven-segment digit encoding.
//!
//! Bit layout follows the display wiring: bits 0..=6 are segments A..G,
//! bit 7 is the decimal point, used here as a field separator between
//! digit pairs.

/// One digit's worth of segment drive bits.
pub type SegmentPattern = u8;

/// All segments off; used for unlit positions.
pub const BLANK: SegmentPattern = 0x00;

/// Decimal-point bit, OR'd onto a digit pattern to mark the units
/// column of a two-digit field.
pub const SEPARATOR: SegmentPattern = 1 << 7;

/// Glyph used for the digit nine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NineStyle {
    /// Open-tailed nine without the D segment (0x67).
    #[default]
    Open,
    /// Curly nine with the D segment closing the tail (0x6F).
    Curly,
}

const DIGITS: [SegmentPattern; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x67, // 9
];

/// Segment pattern for a decimal digit.
///
/// `digit` must be below 10; debug builds assert, release builds wrap
/// modulo 10.
pub fn encode(digit: u8, nine: NineStyle) -> SegmentPattern {
    debug_assert!(digit < 10, "digit out of range");
    if digit == 9 && nine == NineStyle::Curly {
        return 0x6F;
    }
    DIGITS[(digit % 10) as usize]
}

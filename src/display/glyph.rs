//! Seven-segment glyphs and their segment patterns.

use serde::Serialize;

/// Segment masks indexed by glyph table position.
///
/// Bit 6 is segment `a` down to bit 0 for segment `g`. Entries 0-9 are the
/// decimal digits, 10 is the minus sign and 11 the error "E".
pub const SEGMENT_PATTERNS: [u8; 12] = [
    0b111_1110, // 0
    0b011_0000, // 1
    0b110_1101, // 2
    0b111_1001, // 3
    0b011_0011, // 4
    0b101_1011, // 5
    0b101_1111, // 6
    0b111_0000, // 7
    0b111_1111, // 8
    0b111_1011, // 9
    0b000_0001, // -
    0b100_1111, // E
];

const MINUS_INDEX: usize = 10;
const ERROR_INDEX: usize = 11;

/// A single display slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Glyph {
    /// Slot is dark.
    #[default]
    Blank,
    /// A decimal digit, always `0..=9`.
    Digit(u8),
    /// The minus sign of a negative result.
    Minus,
    /// The error indicator.
    Error,
}

impl Glyph {
    /// Position of this glyph in [`SEGMENT_PATTERNS`], or `None` for a blank slot.
    pub fn table_index(self) -> Option<usize> {
        match self {
            Self::Blank => None,
            Self::Digit(d) => Some(usize::from(d.min(9))),
            Self::Minus => Some(MINUS_INDEX),
            Self::Error => Some(ERROR_INDEX),
        }
    }

    /// Segment mask to drive for this glyph. Blank slots light nothing.
    pub fn segments(self) -> u8 {
        self.table_index().map_or(0, |i| SEGMENT_PATTERNS[i])
    }

    /// Single-character text form used for logs and plain output.
    pub fn as_char(self) -> char {
        match self {
            Self::Blank => ' ',
            Self::Digit(d) => char::from(b'0' + d.min(9)),
            Self::Minus => '-',
            Self::Error => 'E',
        }
    }
}

//! Encoding calculator values into the four-slot display buffer.
//!
//! The encoder is the only writer of [`DisplayBuffer`] contents. It fills
//! digits from the right, blanks the unused slots on the left and places a
//! minus sign next to the most significant digit when there is room for it.

use std::fmt;

use serde::Serialize;

use super::glyph::Glyph;
use crate::calculator::Readout;

/// Number of digit positions on the display.
pub const NUM_DIGITS: usize = 4;

/// Fixed-width buffer of glyphs, leftmost slot first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisplayBuffer([Glyph; NUM_DIGITS]);

impl DisplayBuffer {
    /// A fully dark display.
    pub fn blank() -> Self {
        Self([Glyph::Blank; NUM_DIGITS])
    }

    /// Borrow the slots, leftmost first.
    pub fn slots(&self) -> &[Glyph; NUM_DIGITS] {
        &self.0
    }

    /// Whether every slot is blank.
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|g| *g == Glyph::Blank)
    }

    /// Whether the error glyph is shown.
    pub fn is_error(&self) -> bool {
        self.0.contains(&Glyph::Error)
    }

    /// Read the shown number back as `(magnitude, negative)`.
    ///
    /// Digits are concatenated with blanks stripped. Returns `None` for an
    /// all-blank display or one showing the error glyph.
    pub fn value(&self) -> Option<(u32, bool)> {
        if self.is_error() {
            return None;
        }

        let mut magnitude = 0u32;
        let mut negative = false;
        let mut seen_digit = false;

        for glyph in self.0 {
            match glyph {
                Glyph::Digit(d) => {
                    magnitude = magnitude * 10 + u32::from(d);
                    seen_digit = true;
                }
                Glyph::Minus => negative = true,
                Glyph::Blank | Glyph::Error => {}
            }
        }

        seen_digit.then_some((magnitude, negative))
    }
}

impl fmt::Display for DisplayBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in self.0 {
            write!(f, "{}", glyph.as_char())?;
        }
        Ok(())
    }
}

/// Encode a value in `0..=9999` for display.
///
/// Values wider than the display keep only their lowest four digits. When
/// `negative` is set and all four slots hold digits, the sign is dropped.
pub fn encode(value: u32, negative: bool) -> DisplayBuffer {
    let mut slots = [Glyph::Blank; NUM_DIGITS];

    if value == 0 {
        slots[NUM_DIGITS - 1] = Glyph::Digit(0);
        return DisplayBuffer(slots);
    }

    let mut remaining = value;
    // Number of slots still free on the left once the digits are placed.
    let mut free = NUM_DIGITS;
    while remaining > 0 && free > 0 {
        free -= 1;
        slots[free] = Glyph::Digit(digit_of(remaining));
        remaining /= 10;
    }

    if negative && free > 0 {
        slots[free - 1] = Glyph::Minus;
    }

    DisplayBuffer(slots)
}

/// The error display: "E" on the leftmost digit, the rest dark.
pub fn encode_error() -> DisplayBuffer {
    let mut slots = [Glyph::Blank; NUM_DIGITS];
    slots[0] = Glyph::Error;
    DisplayBuffer(slots)
}

/// Encode whatever the calculator asks to show.
pub fn encode_readout(readout: Readout) -> DisplayBuffer {
    match readout {
        Readout::Blank => DisplayBuffer::blank(),
        Readout::Value {
            magnitude,
            negative,
        } => encode(magnitude, negative),
        Readout::Error => encode_error(),
    }
}

fn digit_of(value: u32) -> u8 {
    // value % 10 is always below 10, so the conversion cannot fail.
    u8::try_from(value % 10).unwrap_or_default()
}

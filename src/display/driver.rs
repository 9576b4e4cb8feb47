//! Display refresh state and drivers.
//!
//! [`DisplayState`] holds the buffer most recently produced by the encoder
//! along with the "refresh needed" flag. A [`DisplayDriver`] consumes the
//! buffer; the flag is cleared only after the driver completes a full pass.

use std::io::Write;

use super::encoder::{DisplayBuffer, NUM_DIGITS};
use super::glyph::Glyph;
use crate::error::DisplayError;

/// Consumer of glyph buffers.
pub trait DisplayDriver {
    /// Draw every slot of `buffer` once.
    fn refresh(&mut self, buffer: &DisplayBuffer) -> Result<(), DisplayError>;
}

/// The shown buffer plus its pending-refresh flag.
#[derive(Debug)]
pub struct DisplayState {
    buffer: DisplayBuffer,
    refresh_needed: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayState {
    /// Start dark, with a refresh pending so the first pass clears the panel.
    pub fn new() -> Self {
        Self {
            buffer: DisplayBuffer::blank(),
            refresh_needed: true,
        }
    }

    /// Replace the shown buffer and request a refresh.
    pub fn show(&mut self, buffer: DisplayBuffer) {
        self.buffer = buffer;
        self.refresh_needed = true;
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn refresh_needed(&self) -> bool {
        self.refresh_needed
    }

    /// Run one refresh pass through `driver` if one is pending.
    ///
    /// Returns `true` when the driver was invoked. On failure the flag stays
    /// set so the next pass retries.
    pub fn flush(&mut self, driver: &mut impl DisplayDriver) -> Result<bool, DisplayError> {
        if !self.refresh_needed {
            return Ok(false);
        }
        driver.refresh(&self.buffer)?;
        self.refresh_needed = false;
        Ok(true)
    }
}

/// Draws the display as three rows of seven-segment ASCII art.
///
/// ```text
///      _   _
///   |  _|  _|
///   | |_   _|
/// ```
#[derive(Debug)]
pub struct TerminalDriver<W: Write> {
    out: W,
    frames: u64,
}

impl<W: Write> TerminalDriver<W> {
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayDriver for TerminalDriver<W> {
    fn refresh(&mut self, buffer: &DisplayBuffer) -> Result<(), DisplayError> {
        for line in render_rows(buffer) {
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}

/// Render a buffer to three text rows, one 3-column cell per digit position.
pub fn render_rows(buffer: &DisplayBuffer) -> [String; 3] {
    let mut rows: [String; 3] = Default::default();
    for (position, glyph) in buffer.slots().iter().enumerate() {
        let cell = segment_cell(*glyph);
        for (row, text) in rows.iter_mut().zip(cell) {
            if position > 0 {
                row.push(' ');
            }
            row.push_str(&text);
        }
    }
    debug_assert_eq!(rows[0].chars().count(), NUM_DIGITS * 4 - 1);
    rows
}

fn segment_cell(glyph: Glyph) -> [String; 3] {
    let mask = glyph.segments();
    let lit = |bit: u8, on: char| if mask & (1 << bit) != 0 { on } else { ' ' };

    // Bit 6 is segment a, bit 0 is segment g.
    let (a, b, c, d, e, f, g) = (
        lit(6, '_'),
        lit(5, '|'),
        lit(4, '|'),
        lit(3, '_'),
        lit(2, '|'),
        lit(1, '|'),
        lit(0, '_'),
    );

    [
        format!(" {a} "),
        format!("{f}{g}{b}"),
        format!("{e}{d}{c}"),
    ]
}

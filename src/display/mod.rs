//! Four-digit seven-segment display.
//!
//! This module provides:
//! - The glyph set and segment pattern table
//! - Encoding values and the error condition into a display buffer
//! - Refresh bookkeeping and a terminal driver

mod driver;
mod encoder;
mod glyph;

pub use driver::{DisplayDriver, DisplayState, TerminalDriver, render_rows};
pub use encoder::{DisplayBuffer, NUM_DIGITS, encode, encode_error, encode_readout};
pub use glyph::{Glyph, SEGMENT_PATTERNS};

//! Keypad calculator with a four-digit seven-segment display.
//!
//! Keys flow from a [`keypad::KeySource`] through the [`keypad::Keymap`] into
//! the [`calculator::Calculator`]; the resulting readout is encoded into a
//! [`display::DisplayBuffer`] and drawn by a [`display::DisplayDriver`].
//! [`runtime::Runtime`] ties the pieces into a single poll loop.

pub mod calculator;
pub mod config;
pub mod display;
pub mod error;
pub mod keypad;
pub mod logging;
pub mod runtime;

pub use calculator::{CalcState, Calculator, Operator, Readout};
pub use display::{DisplayBuffer, Glyph, encode, encode_error};
pub use error::{ConfigError, DisplayError};
pub use keypad::Key;
pub use runtime::Runtime;

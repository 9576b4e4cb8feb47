//! Keypad input: key symbols, layout, debounce and event sources.

mod debounce;
mod key;
mod keymap;
mod source;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use key::{Key, parse_sequence};
pub use keymap::{DEFAULT_LAYOUT, Keymap};
pub use source::{KeySource, ScriptedKeys, StdinKeys};

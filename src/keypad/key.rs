//! Calculator keys and their keypad symbols.

use std::fmt;

/// A key with meaning to the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A decimal digit, always `0..=9`.
    Digit(u8),
    Add,
    Multiply,
    Equals,
    Clear,
}

impl Key {
    /// Build a digit key. Returns `None` above 9.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// Map a keypad symbol to its key.
    ///
    /// `A` adds, `B` multiplies, `C` clears and `D` evaluates. Anything else,
    /// including the `*` and `#` keys on the pad, has no calculator meaning.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => symbol
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .and_then(Self::digit),
            'A' => Some(Self::Add),
            'B' => Some(Self::Multiply),
            'C' => Some(Self::Clear),
            'D' => Some(Self::Equals),
            _ => None,
        }
    }

    /// The keypad symbol printed on this key.
    pub fn symbol(self) -> char {
        match self {
            Self::Digit(d) => char::from(b'0' + d.min(9)),
            Self::Add => 'A',
            Self::Multiply => 'B',
            Self::Clear => 'C',
            Self::Equals => 'D',
        }
    }

    pub fn is_digit(self) -> bool {
        matches!(self, Self::Digit(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Parse a literal key sequence such as `"123B45D"`.
///
/// Whitespace and symbols without calculator meaning are skipped.
pub fn parse_sequence(input: &str) -> Vec<Key> {
    input.chars().filter_map(Key::from_symbol).collect()
}

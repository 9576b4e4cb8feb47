//! Physical keypad layout.
//!
//! The layout is a grid of symbols as printed on the pad, row by row. Only
//! symbols present in the layout are accepted from a key source, and of
//! those only the ones with calculator meaning produce a [`Key`].

use std::collections::HashSet;

use super::key::Key;
use crate::error::ConfigError;

/// Rows of the standard 4x4 membrane keypad.
pub const DEFAULT_LAYOUT: [&str; 4] = ["123A", "456B", "789C", "*0#D"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Keymap {
    rows: Vec<Vec<char>>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            rows: DEFAULT_LAYOUT
                .iter()
                .map(|row| row.chars().collect())
                .collect(),
        }
    }
}

impl Keymap {
    /// Build a keymap from layout rows.
    ///
    /// Rows must be non-empty and of equal width, symbols unique, and every
    /// digit must appear somewhere on the pad.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ConfigError> {
        let rows: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let width = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(invalid("layout has no keys")),
        };

        if let Some(index) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid(format!(
                "row {index} has {} keys, expected {width}",
                rows[index].len()
            )));
        }

        let mut seen = HashSet::new();
        for symbol in rows.iter().flatten() {
            if !seen.insert(*symbol) {
                return Err(invalid(format!("symbol '{symbol}' appears more than once")));
            }
        }

        if let Some(missing) = ('0'..='9').find(|d| !seen.contains(d)) {
            return Err(invalid(format!("digit '{missing}' is missing")));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Symbol at a matrix position.
    pub fn symbol_at(&self, row: usize, column: usize) -> Option<char> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Whether the pad carries this symbol.
    pub fn contains(&self, symbol: char) -> bool {
        self.rows.iter().flatten().any(|s| *s == symbol)
    }

    /// Translate a raw symbol into a calculator key.
    ///
    /// Returns `None` for symbols not on the pad and for pad keys the
    /// calculator does not use.
    pub fn translate(&self, symbol: char) -> Option<Key> {
        if !self.contains(symbol) {
            return None;
        }
        Key::from_symbol(symbol)
    }

    /// The layout as printable rows.
    pub fn layout_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

fn invalid(reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidLayout {
        reason: reason.into(),
    }
}

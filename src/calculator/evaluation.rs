//! Applying an operator to two operands.

use super::state::{MAX_VALUE, Operator};

/// Outcome of evaluating `first <op> second`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// The result fits on the display.
    Value {
        /// Absolute value of the result.
        magnitude: u32,
        /// Set only when subtraction went below zero.
        negative: bool,
    },
    /// The magnitude exceeds [`MAX_VALUE`].
    Overflow {
        /// The out-of-range magnitude, kept for diagnostics.
        magnitude: u32,
    },
}

impl Evaluation {
    /// Check if the result fits on the display.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Value { .. })
    }

    /// Get the magnitude regardless of overflow.
    pub fn magnitude(&self) -> u32 {
        match self {
            Self::Value { magnitude, .. } | Self::Overflow { magnitude } => *magnitude,
        }
    }
}

/// Evaluate a binary operation on two in-range operands.
///
/// With [`Operator::None`] the result is zero.
pub fn evaluate(operator: Operator, first: u32, second: u32) -> Evaluation {
    let (magnitude, negative) = match operator {
        Operator::Add => (first.saturating_add(second), false),
        Operator::Subtract => (first.abs_diff(second), first < second),
        Operator::Multiply => (first.saturating_mul(second), false),
        Operator::None => (0, false),
    };

    if magnitude > MAX_VALUE {
        Evaluation::Overflow { magnitude }
    } else {
        Evaluation::Value {
            magnitude,
            negative,
        }
    }
}

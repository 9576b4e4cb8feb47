//! Calculator state, operators and what the display should show.

use serde::Serialize;

/// Largest value an operand or displayed result may hold.
pub const MAX_VALUE: u32 = 9999;

/// Where the calculator is in an entry cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum CalcState {
    /// Waiting for the first digit.
    #[default]
    Idle,
    /// Entering the first operand.
    FirstOperand,
    /// An operator has been chosen; waiting for the second operand.
    OperatorSelected,
    /// Entering the second operand.
    SecondOperand,
    /// Showing a computed result.
    Result,
    /// An operand or result went out of range.
    Error,
}

/// The pending binary operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[default]
    None,
    Add,
    /// Computable through [`Calculator::select_operator`](super::Calculator::select_operator)
    /// only; no key on the pad selects it.
    Subtract,
    Multiply,
}

/// The display content requested by the calculator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readout {
    Blank,
    Value { magnitude: u32, negative: bool },
    Error,
}

impl Readout {
    pub(crate) fn value(magnitude: u32) -> Self {
        Self::Value {
            magnitude,
            negative: false,
        }
    }
}

/// A read-only view of the calculator registers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: CalcState,
    pub operator: Operator,
    pub first_operand: u32,
    pub second_operand: u32,
    pub result: u32,
    pub negative: bool,
}

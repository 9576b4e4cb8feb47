//! Calculator module for the two-operand keypad calculator.
//!
//! This module provides functionality to:
//! - Track entry state, operands and the pending operator
//! - Evaluate a single operation with overflow detection
//! - Report what the display should show after each key

mod evaluation;
mod machine;
mod state;

pub use evaluation::{Evaluation, evaluate};
pub use machine::Calculator;
pub use state::{CalcState, MAX_VALUE, Operator, Readout, Snapshot};

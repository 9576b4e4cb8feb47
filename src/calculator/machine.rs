//! The keypad calculator state machine.
//!
//! A [`Calculator`] consumes one [`Key`] at a time. Every (state, key) pair
//! has a defined outcome; keys with no meaning in the current state are
//! ignored. Overflow is a state, not an error: the machine moves to
//! [`CalcState::Error`] and waits for a digit or Clear.

use tracing::{debug, warn};

use super::evaluation::{Evaluation, evaluate};
use super::state::{CalcState, MAX_VALUE, Operator, Readout, Snapshot};
use crate::keypad::Key;

/// Calculator registers and the active state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Calculator {
    state: CalcState,
    operator: Operator,
    first: u32,
    second: u32,
    result: u32,
    negative: bool,
}

impl Calculator {
    /// A calculator in `Idle` with every register zeroed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key to the machine.
    ///
    /// Returns the new readout when the key changed what the display should
    /// show. Clear always returns a (blank) readout.
    pub fn process_key(&mut self, key: Key) -> Option<Readout> {
        let from = self.state;
        let before = self.readout();

        match key {
            Key::Digit(digit) => self.enter_digit(digit),
            Key::Add => {
                self.select_operator(Operator::Add);
            }
            Key::Multiply => {
                self.select_operator(Operator::Multiply);
            }
            Key::Equals => {
                self.equals();
            }
            Key::Clear => self.reset(),
        }

        debug!(key = %key.symbol(), ?from, to = ?self.state, "processed key");

        let after = self.readout();
        (after != before || key == Key::Clear).then_some(after)
    }

    /// Choose the pending operator, as an operator key would.
    ///
    /// Applies from `FirstOperand`, or from `Result` where the result becomes
    /// the new first operand. This is the only way to select
    /// [`Operator::Subtract`]. Returns `false` when the operator was ignored.
    pub fn select_operator(&mut self, operator: Operator) -> bool {
        if operator == Operator::None {
            return false;
        }

        match self.state {
            CalcState::FirstOperand => {}
            CalcState::Result => {
                // Chain: the sign of a negative result does not carry over.
                self.first = self.result;
                self.negative = false;
            }
            _ => return false,
        }

        self.operator = operator;
        self.state = CalcState::OperatorSelected;
        true
    }

    /// Zero every register and return to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn enter_digit(&mut self, digit: u8) {
        let digit = u32::from(digit);

        match self.state {
            CalcState::Idle => {
                self.first = digit;
                self.state = CalcState::FirstOperand;
            }
            CalcState::FirstOperand => {
                self.first = self.first * 10 + digit;
                if self.first > MAX_VALUE {
                    warn!(operand = self.first, "first operand overflow");
                    self.state = CalcState::Error;
                }
            }
            CalcState::OperatorSelected => {
                self.second = digit;
                self.state = CalcState::SecondOperand;
            }
            CalcState::SecondOperand => {
                self.second = self.second * 10 + digit;
                if self.second > MAX_VALUE {
                    warn!(operand = self.second, "second operand overflow");
                    self.state = CalcState::Error;
                }
            }
            CalcState::Result => {
                self.first = digit;
                self.second = 0;
                self.operator = Operator::None;
                self.state = CalcState::FirstOperand;
            }
            CalcState::Error => {
                self.reset();
                self.first = digit;
                self.state = CalcState::FirstOperand;
            }
        }
    }

    fn equals(&mut self) {
        if self.state != CalcState::SecondOperand {
            return;
        }

        match evaluate(self.operator, self.first, self.second) {
            Evaluation::Value {
                magnitude,
                negative,
            } => {
                self.result = magnitude;
                self.negative = negative;
                self.state = CalcState::Result;
            }
            Evaluation::Overflow { magnitude } => {
                warn!(
                    operator = ?self.operator,
                    first = self.first,
                    second = self.second,
                    magnitude,
                    "result overflow"
                );
                self.result = magnitude;
                self.negative = false;
                self.state = CalcState::Error;
            }
        }
    }

    /// What the display should show for the current state.
    ///
    /// While an operator is pending the first operand stays visible.
    pub fn readout(&self) -> Readout {
        match self.state {
            CalcState::Idle => Readout::Blank,
            CalcState::FirstOperand | CalcState::OperatorSelected => Readout::value(self.first),
            CalcState::SecondOperand => Readout::value(self.second),
            CalcState::Result => Readout::Value {
                magnitude: self.result,
                negative: self.negative,
            },
            CalcState::Error => Readout::Error,
        }
    }

    pub fn state(&self) -> CalcState {
        self.state
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn first_operand(&self) -> u32 {
        self.first
    }

    pub fn second_operand(&self) -> u32 {
        self.second
    }

    pub fn result(&self) -> u32 {
        self.result
    }

    /// Whether the last result was negative.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            operator: self.operator,
            first_operand: self.first,
            second_operand: self.second,
            result: self.result,
            negative: self.negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::parse_sequence;

    fn run(keys: &str) -> Calculator {
        let mut calc = Calculator::new();
        feed(&mut calc, keys);
        calc
    }

    fn feed(calc: &mut Calculator, keys: &str) {
        for key in parse_sequence(keys) {
            calc.process_key(key);
        }
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.state(), CalcState::Idle);
        assert_eq!(calc.operator(), Operator::None);
        assert_eq!(calc.first_operand(), 0);
        assert_eq!(calc.second_operand(), 0);
        assert_eq!(calc.readout(), Readout::Blank);
    }

    #[test]
    fn test_digit_entry_accumulates() {
        for value in 0..=9999u32 {
            let calc = run(&value.to_string());
            assert_eq!(calc.state(), CalcState::FirstOperand);
            assert_eq!(calc.first_operand(), value);
        }
    }

    #[test]
    fn test_leading_zeros() {
        let calc = run("0042");
        assert_eq!(calc.first_operand(), 42);
        assert_eq!(calc.readout(), Readout::value(42));
    }

    #[test]
    fn test_keys_ignored_in_idle() {
        for keys in ["A", "B", "D", "ABD"] {
            let calc = run(keys);
            assert_eq!(calc, Calculator::new(), "keys {keys}");
        }
    }

    #[test]
    fn test_operator_selection() {
        let calc = run("12A");
        assert_eq!(calc.state(), CalcState::OperatorSelected);
        assert_eq!(calc.operator(), Operator::Add);
        // First operand stays on display.
        assert_eq!(calc.readout(), Readout::value(12));

        let calc = run("12B");
        assert_eq!(calc.operator(), Operator::Multiply);
    }

    #[test]
    fn test_second_operator_ignored() {
        let calc = run("12AB");
        assert_eq!(calc.operator(), Operator::Add);
        assert_eq!(calc.state(), CalcState::OperatorSelected);

        let calc = run("12A3B");
        assert_eq!(calc.operator(), Operator::Add);
        assert_eq!(calc.state(), CalcState::SecondOperand);
    }

    #[test]
    fn test_equals_only_from_second_operand() {
        assert_eq!(run("12D").state(), CalcState::FirstOperand);
        assert_eq!(run("12AD").state(), CalcState::OperatorSelected);

        let calc = run("2A3DD");
        assert_eq!(calc.state(), CalcState::Result);
        assert_eq!(calc.result(), 5);
    }

    #[test]
    fn test_addition_and_multiplication() {
        let calc = run("2A3D");
        assert_eq!(calc.result(), 5);
        assert_eq!(calc.state(), CalcState::Result);

        let calc = run("4B5D");
        assert_eq!(calc.result(), 20);

        let calc = run("123B45D");
        assert_eq!(calc.result(), 5535);
        assert_eq!(
            calc.readout(),
            Readout::Value {
                magnitude: 5535,
                negative: false
            }
        );
    }

    #[test]
    fn test_operand_overflow() {
        let calc = run("99999");
        assert_eq!(calc.state(), CalcState::Error);
        assert_eq!(calc.readout(), Readout::Error);
        // Operand is frozen, not cleared.
        assert_eq!(calc.first_operand(), 99_999);

        let calc = run("1A10000");
        assert_eq!(calc.state(), CalcState::Error);
        assert_eq!(calc.first_operand(), 1);
    }

    #[test]
    fn test_overflow_boundary() {
        // Any accumulator up to 999 takes another digit safely.
        for acc in 0..=999u32 {
            for digit in 0..=9u8 {
                let mut calc = run(&acc.to_string());
                calc.process_key(Key::Digit(digit));
                assert_eq!(calc.state(), CalcState::FirstOperand);
            }
        }
        for acc in 1000..=9999u32 {
            let mut calc = run(&acc.to_string());
            calc.process_key(Key::Digit(0));
            assert_eq!(calc.state(), CalcState::Error, "accumulator {acc}");
        }
    }

    #[test]
    fn test_result_overflow() {
        let calc = run("9999B9999D");
        assert_eq!(calc.state(), CalcState::Error);
        assert_eq!(calc.readout(), Readout::Error);

        let calc = run("9999A1D");
        assert_eq!(calc.state(), CalcState::Error);
    }

    #[test]
    fn test_error_ignores_everything_but_digits() {
        let mut calc = run("9999B9999D");
        feed(&mut calc, "ABD");
        assert_eq!(calc.state(), CalcState::Error);
    }

    #[test]
    fn test_digit_recovers_from_error() {
        let mut calc = run("9999B9999D");
        feed(&mut calc, "7");
        assert_eq!(calc.state(), CalcState::FirstOperand);
        assert_eq!(calc.first_operand(), 7);
        assert_eq!(calc.second_operand(), 0);
        assert_eq!(calc.operator(), Operator::None);
        assert_eq!(calc.result(), 0);

        feed(&mut calc, "A3D");
        assert_eq!(calc.result(), 10);
    }

    #[test]
    fn test_clear_from_every_state() {
        for keys in ["", "12", "12A", "12A3", "12A3D", "99999", "9999B9999D"] {
            let mut calc = run(keys);
            let readout = calc.process_key(Key::Clear);
            assert_eq!(readout, Some(Readout::Blank), "keys {keys}");
            assert_eq!(calc, Calculator::new(), "keys {keys}");

            // Idempotent.
            calc.process_key(Key::Clear);
            assert_eq!(calc, Calculator::new());
        }
    }

    #[test]
    fn test_clear_mid_entry() {
        let calc = run("123A45C");
        assert_eq!(calc.state(), CalcState::Idle);
        assert_eq!(calc.first_operand(), 0);
        assert_eq!(calc.second_operand(), 0);
    }

    #[test]
    fn test_chaining_reuses_result() {
        let mut calc = run("5B5D");
        assert_eq!(calc.result(), 25);

        feed(&mut calc, "A5D");
        assert_eq!(calc.result(), 30);
        assert_eq!(calc.state(), CalcState::Result);
    }

    #[test]
    fn test_digit_after_result_starts_over() {
        let calc = run("5B5D3");
        assert_eq!(calc.state(), CalcState::FirstOperand);
        assert_eq!(calc.first_operand(), 3);
        assert_eq!(calc.second_operand(), 0);
        assert_eq!(calc.operator(), Operator::None);
    }

    #[test]
    fn test_subtract_via_direct_api() {
        let mut calc = run("4");
        assert!(calc.select_operator(Operator::Subtract));
        feed(&mut calc, "9D");
        assert_eq!(calc.result(), 5);
        assert!(calc.is_negative());
        assert_eq!(
            calc.readout(),
            Readout::Value {
                magnitude: 5,
                negative: true
            }
        );

        // Chaining drops the sign and clears it for the next operation.
        feed(&mut calc, "A1D");
        assert_eq!(calc.result(), 6);
        assert!(!calc.is_negative());
    }

    #[test]
    fn test_select_operator_rejected() {
        let mut calc = Calculator::new();
        assert!(!calc.select_operator(Operator::Subtract));

        let mut calc = run("3");
        assert!(!calc.select_operator(Operator::None));
        assert_eq!(calc.state(), CalcState::FirstOperand);
    }

    #[test]
    fn test_process_key_reports_display_changes() {
        let mut calc = Calculator::new();
        assert_eq!(calc.process_key(Key::Add), None);
        assert_eq!(calc.process_key(Key::Digit(4)), Some(Readout::value(4)));
        // Operator keeps the first operand on screen.
        assert_eq!(calc.process_key(Key::Multiply), None);
        assert_eq!(calc.process_key(Key::Digit(5)), Some(Readout::value(5)));
        assert_eq!(calc.process_key(Key::Equals), Some(Readout::value(20)));
        assert_eq!(calc.process_key(Key::Equals), None);
    }

    #[test]
    fn test_snapshot() {
        let snapshot = run("12A3").snapshot();
        assert_eq!(snapshot.state, CalcState::SecondOperand);
        assert_eq!(snapshot.operator, Operator::Add);
        assert_eq!(snapshot.first_operand, 12);
        assert_eq!(snapshot.second_operand, 3);
    }
}

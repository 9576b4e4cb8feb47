//! End-to-end key sequence harness: literal keypad input in, display out.

use std::time::{Duration, Instant};

use keycalc::display::DisplayDriver;
use keycalc::keypad::{Keymap, ScriptedKeys, parse_sequence};
use keycalc::{CalcState, Calculator, DisplayBuffer, DisplayError, Key, Runtime};

#[derive(Default)]
struct Recorder {
    frames: Vec<DisplayBuffer>,
}

impl DisplayDriver for Recorder {
    fn refresh(&mut self, buffer: &DisplayBuffer) -> Result<(), DisplayError> {
        self.frames.push(*buffer);
        Ok(())
    }
}

fn simulate(keys: &str) -> Runtime<ScriptedKeys, Recorder> {
    let mut runtime = Runtime::new(ScriptedKeys::new(keys), Recorder::default(), Keymap::default());
    runtime.run(Duration::ZERO).unwrap();
    runtime
}

/// Run a sequence and check result, state and what the display shows.
fn check_operation(keys: &str, expected: u32, state: CalcState) {
    let runtime = simulate(keys);
    let calc = runtime.calculator();

    assert_eq!(calc.result(), expected, "result for {keys}");
    assert_eq!(calc.state(), state, "state for {keys}");
    assert_eq!(
        runtime.buffer().value(),
        Some((expected, false)),
        "display for {keys}"
    );
}

#[test]
fn addition_simple() {
    check_operation("2A3D", 5, CalcState::Result);
}

#[test]
fn multiplication_simple() {
    check_operation("4B5D", 20, CalcState::Result);
}

#[test]
fn multi_digit_numbers() {
    check_operation("123B45D", 5535, CalcState::Result);
}

#[test]
fn overflow_shows_error() {
    let runtime = simulate("9999B9999D");
    assert_eq!(runtime.calculator().state(), CalcState::Error);
    assert!(runtime.buffer().is_error());
    assert_eq!(runtime.buffer().to_string(), "E   ");
}

#[test]
fn clear_mid_operation() {
    let runtime = simulate("123A45C");
    let calc = runtime.calculator();
    assert_eq!(calc.state(), CalcState::Idle);
    assert_eq!(calc.first_operand(), 0);
    assert_eq!(calc.second_operand(), 0);
    assert!(runtime.buffer().is_blank());
}

#[test]
fn operation_after_result() {
    let mut runtime = simulate("5B5D");
    assert_eq!(runtime.calculator().result(), 25);

    runtime.source_mut().extend("A5D");
    runtime.run(Duration::ZERO).unwrap();
    assert_eq!(runtime.calculator().result(), 30);
    assert_eq!(runtime.calculator().state(), CalcState::Result);
    assert_eq!(runtime.buffer().to_string(), "  30");
}

#[test]
fn results_decode_from_display() {
    let cases = [
        ("0A0D", 0),
        ("1A1D", 2),
        ("9B9D", 81),
        ("99B99D", 9801),
        ("5000A4999D", 9999),
        ("100B10D", 1000),
    ];
    for (keys, expected) in cases {
        check_operation(keys, expected, CalcState::Result);
    }
}

#[test]
fn clear_is_total() {
    let prefixes = ["", "7", "7A", "7A8", "7A8D", "77777", "9999B2D", "*#"];
    for prefix in prefixes {
        let mut calc = Calculator::new();
        for key in parse_sequence(prefix) {
            calc.process_key(key);
        }
        calc.process_key(Key::Clear);
        assert_eq!(calc.state(), CalcState::Idle, "after {prefix}C");
        assert_eq!(calc.first_operand(), 0);
        assert_eq!(calc.second_operand(), 0);
        assert_eq!(calc.result(), 0);
    }
}

#[test]
fn step_polls_without_blocking() {
    let mut runtime = Runtime::new(ScriptedKeys::new(""), Recorder::default(), Keymap::default());
    let start = Instant::now();
    for _ in 0..1000 {
        let step = runtime.step(Instant::now()).unwrap();
        assert_eq!(step.key, None);
    }
    assert!(start.elapsed() < Duration::from_secs(1));
}

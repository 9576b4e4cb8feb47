//! The cooperative poll loop.
//!
//! One iteration: poll the key source, translate the symbol through the
//! keymap, feed the calculator, re-encode the display if the key changed it,
//! then give the driver a refresh pass if one is pending. Nothing blocks
//! except the optional sleep between iterations in [`Runtime::run`].

use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::calculator::{Calculator, Operator};
use crate::display::{DisplayBuffer, DisplayDriver, DisplayState, encode_readout};
use crate::error::DisplayError;
use crate::keypad::{Key, KeySource, Keymap};

/// What a single loop iteration did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Step {
    /// Raw symbol taken from the source, if any.
    pub symbol: Option<char>,
    /// Calculator key the symbol mapped to.
    pub key: Option<Key>,
    /// Whether the driver drew a frame.
    pub refreshed: bool,
}

/// Owns the calculator, the display state and both collaborators.
#[derive(Debug)]
pub struct Runtime<S, D> {
    calculator: Calculator,
    display: DisplayState,
    keymap: Keymap,
    source: S,
    driver: D,
}

impl<S: KeySource, D: DisplayDriver> Runtime<S, D> {
    pub fn new(source: S, driver: D, keymap: Keymap) -> Self {
        Self {
            calculator: Calculator::new(),
            display: DisplayState::new(),
            keymap,
            source,
            driver,
        }
    }

    /// Run one loop iteration at time `now`.
    pub fn step(&mut self, now: Instant) -> Result<Step, DisplayError> {
        let mut step = Step::default();

        if let Some(symbol) = self.source.poll(now) {
            step.symbol = Some(symbol);
            match self.keymap.translate(symbol) {
                Some(key) => {
                    step.key = Some(key);
                    if let Some(readout) = self.calculator.process_key(key) {
                        self.display.show(encode_readout(readout));
                    }
                }
                None => debug!(?symbol, "ignoring symbol"),
            }
        }

        step.refreshed = self.display.flush(&mut self.driver)?;
        Ok(step)
    }

    /// Step until the source is exhausted, pausing `interval` between steps.
    ///
    /// Returns the number of keys processed.
    pub fn run(&mut self, interval: Duration) -> Result<usize, DisplayError> {
        info!(?interval, "calculator loop started");
        let mut keys = 0;

        while !self.source.is_exhausted() {
            if self.step(Instant::now())?.key.is_some() {
                keys += 1;
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }

        // Draw whatever the last key produced.
        self.display.flush(&mut self.driver)?;
        info!(keys, "calculator loop finished");
        Ok(keys)
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Select an operator that has no key, such as subtraction.
    pub fn select_operator(&mut self, operator: Operator) -> bool {
        let applied = self.calculator.select_operator(operator);
        if applied {
            self.display.show(encode_readout(self.calculator.readout()));
        }
        applied
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        self.display.buffer()
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

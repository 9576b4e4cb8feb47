//! Key event sources.
//!
//! A source is polled once per loop iteration and must return promptly:
//! either one raw keypad symbol or nothing. Debouncing happens inside the
//! source; the calculator never filters repeats itself.

use std::collections::VecDeque;
use std::io::{BufRead, BufReader};
use std::thread;
use std::time::Instant;

use flume::{Receiver, TryRecvError};
use tracing::{debug, trace};

use super::debounce::Debouncer;

/// Producer of raw keypad symbols.
pub trait KeySource {
    /// Non-blocking check for the next symbol.
    fn poll(&mut self, now: Instant) -> Option<char>;

    /// Whether the source can produce no further symbols.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Replays a fixed symbol sequence, one symbol per poll.
///
/// The sequence is treated as already debounced.
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    pending: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(sequence: &str) -> Self {
        Self {
            pending: sequence.chars().collect(),
        }
    }

    /// Append more symbols to replay.
    pub fn extend(&mut self, sequence: &str) {
        self.pending.extend(sequence.chars());
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl KeySource for ScriptedKeys {
    fn poll(&mut self, _now: Instant) -> Option<char> {
        self.pending.pop_front()
    }

    fn is_exhausted(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Symbols typed on a line-oriented reader, usually stdin.
///
/// A background thread reads lines and forwards them over a channel. Each
/// poll takes at most one symbol, and only when the debouncer admits it;
/// symbols arriving faster wait for a later poll rather than being lost.
#[derive(Debug)]
pub struct StdinKeys {
    lines: Receiver<String>,
    pending: VecDeque<char>,
    debouncer: Debouncer,
    closed: bool,
}

impl StdinKeys {
    /// Read from the process's stdin.
    pub fn spawn(debouncer: Debouncer) -> std::io::Result<Self> {
        Self::spawn_reader(BufReader::new(std::io::stdin()), debouncer)
    }

    /// Read from any line source on a named reader thread.
    pub fn spawn_reader<R>(reader: R, debouncer: Debouncer) -> std::io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = flume::unbounded();

        thread::Builder::new()
            .name("keycalc-keys".to_string())
            .spawn(move || {
                for line in reader.lines() {
                    let Ok(line) = line else { break };
                    if tx.send(line).is_err() {
                        break; // Receiver dropped
                    }
                }
                debug!("key reader reached end of input");
            })?;

        Ok(Self::from_channel(rx, debouncer))
    }

    /// Consume lines from an existing channel.
    pub fn from_channel(lines: Receiver<String>, debouncer: Debouncer) -> Self {
        Self {
            lines,
            pending: VecDeque::new(),
            debouncer,
            closed: false,
        }
    }

    fn fill(&mut self) {
        while self.pending.is_empty() && !self.closed {
            match self.lines.try_recv() {
                Ok(line) => self
                    .pending
                    .extend(line.chars().filter(|c| !c.is_whitespace())),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => self.closed = true,
            }
        }
    }
}

impl KeySource for StdinKeys {
    fn poll(&mut self, now: Instant) -> Option<char> {
        self.fill();
        if self.pending.is_empty() || !self.debouncer.admit(now) {
            return None;
        }
        let symbol = self.pending.pop_front();
        trace!(?symbol, "key symbol admitted");
        symbol
    }

    fn is_exhausted(&self) -> bool {
        self.closed && self.pending.is_empty()
    }
}

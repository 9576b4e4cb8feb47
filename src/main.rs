use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use keycalc::calculator::Snapshot;
use keycalc::config::Settings;
use keycalc::display::{TerminalDriver, render_rows};
use keycalc::keypad::{Keymap, ScriptedKeys, StdinKeys};
use keycalc::{Runtime, logging};

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "Keypad calculator with a seven-segment display")]
struct Cli {
    /// Path to a config file (defaults to <config dir>/keycalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Type keypad symbols on stdin and watch the display
    Run {
        /// Override the debounce interval in milliseconds
        #[arg(long)]
        debounce_ms: Option<u64>,
    },
    /// Replay a key sequence such as 123B45D and print the final display
    Eval {
        keys: String,

        /// Print the calculator registers as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct EvalOutput<'a> {
    keys: &'a str,
    display: String,
    #[serde(flatten)]
    snapshot: Snapshot,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("Failed to load config")?;
    logging::init_with_config(&settings.logging, cli.verbose);

    let keymap = settings
        .keypad
        .keymap()
        .context("Failed to build keypad layout")?;

    match cli.command {
        Command::Run { debounce_ms } => {
            if let Some(ms) = debounce_ms {
                settings.keypad.debounce_ms = ms;
            }
            run_interactive(&settings, keymap)
        }
        Command::Eval { keys, json } => eval(&keys, json, keymap),
    }
}

fn run_interactive(settings: &Settings, keymap: Keymap) -> Result<()> {
    let stdout = std::io::stdout();
    {
        let mut out = stdout.lock();
        writeln!(out, "Keypad (A add, B multiply, C clear, D equals):")?;
        for line in keymap.layout_lines() {
            writeln!(out, "  {line}")?;
        }
        writeln!(out, "Type keys and press enter. Ctrl-D quits.\n")?;
    }

    let source =
        StdinKeys::spawn(settings.keypad.debouncer()).context("Failed to start key reader")?;
    let mut runtime = Runtime::new(source, TerminalDriver::new(stdout), keymap);

    let keys = runtime
        .run(settings.display.poll_interval())
        .context("Display refresh failed")?;
    info!(keys, "session ended");
    Ok(())
}

fn eval(keys: &str, json: bool, keymap: Keymap) -> Result<()> {
    let mut runtime = Runtime::new(
        ScriptedKeys::new(keys),
        TerminalDriver::new(std::io::sink()),
        keymap,
    );
    runtime
        .run(Duration::ZERO)
        .context("Display refresh failed")?;

    let buffer = *runtime.buffer();
    let snapshot = runtime.calculator().snapshot();

    if json {
        let output = EvalOutput {
            keys,
            display: buffer.to_string(),
            snapshot,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for row in render_rows(&buffer) {
            println!("{row}");
        }
        println!();
        println!(
            "state: {:?}  operator: {:?}  first: {}  second: {}  result: {}{}",
            snapshot.state,
            snapshot.operator,
            snapshot.first_operand,
            snapshot.second_operand,
            if snapshot.negative { "-" } else { "" },
            snapshot.result,
        );
    }

    Ok(())
}

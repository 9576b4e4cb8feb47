//! Logging setup.
//!
//! Logs go to stderr so they never interleave with the display drawn on
//! stdout. `RUST_LOG` takes precedence over the configured filter:
//! ```bash
//! RUST_LOG=keycalc=debug keycalc run
//! ```

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LoggingConfig;

static INIT: Once = Once::new();

/// Initialize logging from configuration.
///
/// `verbosity` raises the default level: 1 for `info`, 2 for `debug`, 3 or
/// more for `trace`. Only the first call takes effect.
pub fn init_with_config(config: &LoggingConfig, verbosity: u8) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directives(config, verbosity))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}

/// Build the filter string from config and CLI verbosity.
pub fn filter_directives(config: &LoggingConfig, verbosity: u8) -> String {
    let default = match verbosity {
        0 => config.default.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut modules: Vec<_> = config.modules.iter().collect();
    modules.sort();

    let mut directives = default.to_string();
    for (module, level) in modules {
        directives.push_str(&format!(",{module}={level}"));
    }
    directives
}

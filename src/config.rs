//! Configuration loaded from a TOML file.
//!
//! Lookup order:
//! - an explicit path (must exist)
//! - `<config dir>/keycalc/config.toml` when present
//! - built-in defaults
//!
//! ```toml
//! [keypad]
//! debounce_ms = 50
//! layout = ["123A", "456B", "789C", "*0#D"]
//!
//! [display]
//! poll_interval_ms = 8
//!
//! [logging]
//! default = "warn"
//!
//! [logging.modules]
//! keycalc = "debug"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::keypad::{DEFAULT_LAYOUT, Debouncer, Keymap};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub keypad: KeypadConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Minimum time between two accepted key presses.
    pub debounce_ms: u64,
    /// Keypad rows as printed on the pad.
    pub layout: Vec<String>,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            layout: DEFAULT_LAYOUT.iter().map(ToString::to_string).collect(),
        }
    }
}

impl KeypadConfig {
    pub fn debouncer(&self) -> Debouncer {
        Debouncer::new(Duration::from_millis(self.debounce_ms))
    }

    pub fn keymap(&self) -> Result<Keymap, ConfigError> {
        Keymap::from_rows(self.layout.as_slice())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Pause between loop iterations; one refresh pass per iteration.
    pub poll_interval_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 8,
        }
    }
}

impl DisplayConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter applied to every target without an override.
    pub default: String,
    /// Per-target level overrides.
    pub modules: HashMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: "warn".to_string(),
            modules: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when no file is found.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and parse a specific file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Default location of the config file, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
}

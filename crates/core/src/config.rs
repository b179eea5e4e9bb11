//! Configuration for the interpreter.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline values used by the CLI when no file is given.
//! 2. **Structures:** A `general` section controlling tracing, the step limit and the
//!    final-state dump.
//!
//! Configuration is supplied as JSON (`--config <file>`) or built with `Config::default()`.
//! Every field is optional in the JSON; missing fields take their default.

use serde::{Deserialize, Serialize};

/// Default configuration constants.
mod defaults {
    /// Maximum instructions executed before a run is aborted.
    ///
    /// Guards against programs that loop forever without reaching `exit`.
    pub const MAX_STEPS: u64 = 100_000;
}

/// Root configuration.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::Config;
///
/// let json = r#"{ "general": { "trace": false, "max_steps": 64 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(!config.general.trace);
/// assert_eq!(config.general.max_steps, 64);
/// assert!(config.general.print_registers);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the text is not valid JSON or a field has the
    /// wrong type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

/// General run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Record a per-stage execution trace
    #[serde(default = "GeneralConfig::default_true")]
    pub trace: bool,

    /// Abort the run after this many executed instructions
    #[serde(default = "GeneralConfig::default_max_steps")]
    pub max_steps: u64,

    /// Print non-zero registers after the run
    #[serde(default = "GeneralConfig::default_true")]
    pub print_registers: bool,

    /// Print populated data slots after the run
    #[serde(default = "GeneralConfig::default_true")]
    pub print_memory: bool,
}

impl GeneralConfig {
    const fn default_true() -> bool {
        true
    }

    const fn default_max_steps() -> u64 {
        defaults::MAX_STEPS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: true,
            max_steps: defaults::MAX_STEPS,
            print_registers: true,
            print_memory: true,
        }
    }
}

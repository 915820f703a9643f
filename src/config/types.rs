//! Configuration data model and defaults.

use serde::Deserialize;

pub const DEFAULT_COUNTDOWN_SECS: u8 = 4;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub startup: StartupConfig,
}

/// Output appearance settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Whether styled output carries color escape sequences.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Startup sequence settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StartupConfig {
    /// Seconds of the switch-to-status countdown; 0 skips the pause.
    pub countdown_secs: u8,
    /// Whether to print the elevated-privilege warnings before the
    /// countdown.
    pub privilege_warning: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
            privilege_warning: true,
        }
    }
}

//! Configuration loading.
//!
//! Precedence: an explicit `--config` path (which must exist), then
//! `./proxilock.toml`, then `~/.config/proxilock/proxilock.toml`, then
//! built-in defaults. Sources are injected as closures so the pipeline is
//! testable without touching the real filesystem.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod types;

pub use types::{Config, DisplayConfig, StartupConfig, DEFAULT_COUNTDOWN_SECS};

/// Config file name looked up in the working directory and the config root.
pub const CONFIG_FILE_NAME: &str = "proxilock.toml";

/// Load configuration from disk.
///
/// `path_override` is an explicit config file path (from the --config
/// flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(path_override, |path| std::fs::read_to_string(path), config_root_dir)
}

fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("proxilock"))
}

fn load_config_from_sources<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = path_override {
        // An explicit path that cannot be read is a hard error.
        let text = read_file(Path::new(path))?;
        return parse_config(&text);
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(root) = config_root() {
        candidates.push(root.join(CONFIG_FILE_NAME));
    }

    for candidate in candidates {
        match read_file(&candidate) {
            Ok(text) => return parse_config(&text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(Config::default())
}

fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    Ok(config)
}

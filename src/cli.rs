//! CLI argument parsing via clap.

use clap::Parser;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("PROXILOCK_BUILD_GIT_HASH"),
    " ",
    env!("PROXILOCK_BUILD_TIMESTAMP"),
    ")"
);

/// Console client for a ProximiLock wireless lock.
#[derive(Debug, Parser)]
#[command(name = "proxilock", version, long_version = LONG_VERSION)]
pub struct Args {
    /// Path to config file (default: ./proxilock.toml or
    /// ~/.config/proxilock/proxilock.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Skip the startup countdown and jump straight to the status page.
    #[arg(long = "skip-countdown")]
    pub skip_countdown: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn defaults_leave_every_flag_unset() {
        let args = Args::parse_from(["proxilock"]);
        assert!(args.config.is_none());
        assert!(!args.no_color);
        assert!(!args.skip_countdown);
    }

    #[test]
    fn flags_parse_together() {
        let args = Args::parse_from([
            "proxilock",
            "--config",
            "custom.toml",
            "--no-color",
            "--skip-countdown",
        ]);
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert!(args.no_color);
        assert!(args.skip_countdown);
    }
}

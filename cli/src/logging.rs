#![deny(missing_docs)]

//! # Logging
//!
//! Installs the `tracing` subscriber for a run. Events go to stderr so the
//! end-of-run report on stdout stays clean.
//!
//! `RUST_LOG` wins over the verbosity flags when it is set.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable compact lines.
    #[default]
    Compact,
    /// One JSON object per event.
    Json,
}

/// Logging settings derived from the global flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level filter directive.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl LoggingConfig {
    /// `-v` count to level: 0 warn, 1 info, 2 debug, 3+ trace. `quiet` wins.
    pub fn from_verbosity(verbosity: u8, quiet: bool, format: LogFormat) -> Self {
        let level = if quiet {
            "error"
        } else {
            match verbosity {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        };
        Self {
            level: level.to_string(),
            format,
        }
    }
}

/// Installs the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> CliResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let result = match config.format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .json()
            .try_init(),
    };
    result.map_err(|e| CliError::General(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_config_from_verbosity() {
        assert_eq!(LoggingConfig::from_verbosity(0, false, LogFormat::Compact).level, "warn");
        assert_eq!(LoggingConfig::from_verbosity(1, false, LogFormat::Compact).level, "info");
        assert_eq!(LoggingConfig::from_verbosity(2, false, LogFormat::Compact).level, "debug");
        assert_eq!(LoggingConfig::from_verbosity(7, false, LogFormat::Json).level, "trace");
        assert_eq!(LoggingConfig::from_verbosity(3, true, LogFormat::Compact).level, "error");
    }
}

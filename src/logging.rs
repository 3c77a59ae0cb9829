//! Diagnostic output setup.
//!
//! Merge progress goes through `tracing`. The `--log` option picks where it
//! lands: `0`/`off`, `1`/`stdout`, `2`/`stderr` (default), or a file path
//! opened in append mode.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Environment variable consulted when `--log` is not given.
pub const LOG_ENV: &str = "PRESET_MERGE_LOG";

/// Default log target (stderr), keeping stdout free for `-` output.
pub const DEFAULT_LOG: &str = "2";

/// Where diagnostics are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stdout,
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn parse(s: &str) -> Self {
        match s {
            "0" | "off" => LogTarget::Off,
            "1" | "stdout" => LogTarget::Stdout,
            "2" | "stderr" => LogTarget::Stderr,
            filename => LogTarget::File(PathBuf::from(filename)),
        }
    }

    /// Resolve the target from the CLI value, then the environment, then
    /// the default.
    pub fn resolve(cli: Option<&str>) -> Self {
        match cli {
            Some(value) => Self::parse(value),
            None => Self::parse(
                std::env::var(LOG_ENV)
                    .as_deref()
                    .unwrap_or(DEFAULT_LOG),
            ),
        }
    }
}

/// Install the global subscriber for `target`.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    match target {
        LogTarget::Off => {}
        LogTarget::Stdout => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::Stderr => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets() {
        assert_eq!(LogTarget::parse("0"), LogTarget::Off);
        assert_eq!(LogTarget::parse("off"), LogTarget::Off);
        assert_eq!(LogTarget::parse("1"), LogTarget::Stdout);
        assert_eq!(LogTarget::parse("stdout"), LogTarget::Stdout);
        assert_eq!(LogTarget::parse("2"), LogTarget::Stderr);
        assert_eq!(LogTarget::parse("stderr"), LogTarget::Stderr);
        assert_eq!(
            LogTarget::parse("merge.log"),
            LogTarget::File(PathBuf::from("merge.log"))
        );
    }

    #[test]
    fn test_cli_value_wins() {
        assert_eq!(LogTarget::resolve(Some("off")), LogTarget::Off);
    }
}

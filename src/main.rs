//! preset-merge
//!
//! Folds a base settings document and any number of presets into one JSON
//! file: permissions are set-unioned, hooks merge by matcher, everything
//! else deep-merges.

use anyhow::{Context, Result};
use clap::Parser;
use preset_merge::cli::Cli;
use preset_merge::io::merge_files;
use preset_merge::logging::{self, LogTarget};
use tracing::{debug, error};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = LogTarget::resolve(cli.log.as_deref());
    logging::init(&target, cli.verbose)?;

    let output = cli.output().context("An output path is required")?;
    let options = cli.options();
    debug!(inputs = cli.inputs().len(), output = %output.display(), ?options, "Starting merge");

    merge_files(cli.inputs(), output, options)
        .inspect_err(|err| {
            if let Some(path) = err.path() {
                error!(path = %path.display(), error = %err, "Merge failed");
            }
        })
        .with_context(|| format!("Failed to produce {}", output.display()))?;

    Ok(())
}

//! CLI definition for preset-merge
//!
//! `preset-merge <base.json> [preset.json...] <output.json>`
//!
//! Every path but the last is an input, merged in the order given; the last
//! is the output (`-` for stdout).

use crate::config::{MergeOptions, MissingPolicy, OutputStyle};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Merge a base settings file with presets into one JSON document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input files in merge order, followed by the output path
    #[arg(value_name = "PATH", num_args = 2.., required = true)]
    pub paths: Vec<PathBuf>,

    /// Fail when an input file does not exist instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Write single-line JSON instead of 2-space indentation
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long)]
    pub log: Option<String>,
}

impl Cli {
    /// Input paths, in merge order.
    pub fn inputs(&self) -> &[PathBuf] {
        match self.paths.split_last() {
            Some((_, inputs)) => inputs,
            None => &[],
        }
    }

    /// Output path (last positional argument).
    pub fn output(&self) -> Option<&Path> {
        self.paths.last().map(PathBuf::as_path)
    }

    /// Environment options with CLI flags applied on top.
    pub fn options(&self) -> MergeOptions {
        let mut options = MergeOptions::from_env();
        if self.strict {
            options.missing = MissingPolicy::Fail;
        }
        if self.compact {
            options.style = OutputStyle::Compact;
        }
        options
    }
}

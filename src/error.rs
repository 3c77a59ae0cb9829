//! Errors raised by the document collaborators.
//!
//! The merge itself is total over JSON trees; only reading inputs and
//! writing the result can fail.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    /// Input file does not exist (only raised under the strict missing policy).
    #[error("input file {} does not exist", .path.display())]
    MissingInput { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize merged document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MergeError {
    pub fn missing(path: &Path) -> Self {
        Self::MissingInput {
            path: path.to_path_buf(),
        }
    }

    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file involved, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::MissingInput { path }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Write { path, .. } => Some(path.as_path()),
            Self::Serialize(_) => None,
        }
    }
}

/// Result type for collaborator operations.
pub type MergeResult<T> = std::result::Result<T, MergeError>;

//! Preset Merge Library
//!
//! Layered merge of JSON settings documents plus the file collaborators
//! used by the `preset-merge` binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod merge;

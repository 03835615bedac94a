//! Errors surfaced by CLI commands.
//!
//! The text transforms themselves never fail; everything here is I/O or
//! argument plumbing around them.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no input: pass TEXT, --file, or pipe text on stdin")]
    MissingInput,

    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("failed to read '{}': {}", .path.display(), .source)]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {}", .path.display(), .source)]
    WriteFile { path: PathBuf, source: io::Error },

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI commands.
pub type Result<T> = std::result::Result<T, Error>;

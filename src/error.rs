//! Error handling for the stencil application.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors raised while scaffolding an artifact.
///
/// Every variant is fatal to the current invocation; files already moved by
/// a partially completed rewrite stay moved.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operations outside the placeholder core
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Missing or invalid configuration: unreadable source, missing required
    /// key, or a resolved path that does not exist
    #[error("Configuration error: {0}")]
    Config(String),

    /// The artifact type tag has no registered replacer variant
    #[error("Unsupported artifact type [{type_tag}]")]
    UnsupportedArtifactType { type_tag: String },

    /// The rewrite or copy target does not exist
    #[error("Directory/file [{path}] doesn't exist")]
    PathNotFound { path: String },

    /// Reading, writing, or moving a file failed mid-substitution; carries
    /// the offending path
    #[error("Can't replace placeholders in [{path}]: {source}")]
    Substitution { path: String, source: io::Error },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}

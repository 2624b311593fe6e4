//! Error types for SSGo.
//!
//! Library crates use [`SsgoError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all SSGo operations.
#[derive(Debug, thiserror::Error)]
pub enum SsgoError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The conversion engine was called in violation of its contract.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single input file that is neither `.txt` nor `.md`.
    #[error("input file is not a .txt or .md file: {path:?}")]
    UnsupportedInput { path: PathBuf },

    /// An input directory with nothing to convert.
    #[error("no .txt / .md files in {path:?}")]
    NoSources { path: PathBuf },

    /// Invalid paths or arguments handed to the site builder.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SsgoError>;

impl SsgoError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an invalid-input error from any displayable message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Error handling for the modviz CLI.
//!
//! A small hierarchy built with `thiserror`:
//! - [`CliError`] is what every command returns.
//! - [`ConfigError`] covers config file loading and validation.
//! - Graph failures (read, malformed input, render) arrive as
//!   [`modviz_graph::Error`] and convert automatically.
//!
//! `main` turns a [`CliError`] into a `miette` report via
//! [`cli_error_to_miette`].
//!
//! # Example
//!
//! ```rust,no_run
//! use modviz_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_input(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path).with_path(path)
//! }
//! ```

mod report;

use std::path::PathBuf;
use thiserror::Error;

pub use report::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading, parsing or rendering the graph failed
    #[error(transparent)]
    Graph(#[from] modviz_graph::Error),

    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input or config file not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors outside the graph pipeline (opening files, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file given with --config doesn't exist
    #[error(
        "Config file not found: {}\n\nHint: Create a modviz.config.json file or fix the --config path",
        .0.display()
    )]
    NotFound(PathBuf),

    /// Config sources could not be merged or deserialized
    #[error(
        "Failed to load configuration: {0}\n\nHint: Check modviz.config.json syntax and MODVIZ_* environment variables"
    )]
    Load(String),

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value:?}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            match err {
                CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                    CliError::FileNotFound(path.as_ref().to_path_buf())
                }
                other => other,
            }
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

//! modviz CLI - render Go module dependency graphs as Graphviz DOT.
//!
//! This crate wires the `modviz-graph` pipeline to a command line:
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - `graph` and `dependents` implementations
//! - [`config`] - Layered configuration (defaults, file, env, flags)
//! - [`error`] - Error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Colored status messages on stderr
//!
//! # Example
//!
//! ```rust
//! use modviz_cli::config::ModvizConfig;
//! use modviz_cli::commands::graph;
//!
//! let mut out = Vec::new();
//! graph::run(&ModvizConfig::default(), "main dep@v1\n".as_bytes(), &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("1 -> 2;"));
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};

//! Command implementations for the modviz CLI.
//!
//! - [`graph`] - Render the module graph as DOT or JSON
//! - [`dependents`] - List the edges leading to a module
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments plus the global `--config` path and returns a Result.

pub mod dependents;
pub mod graph;
pub(crate) mod utils;

pub use dependents::execute as dependents_execute;
pub use graph::execute as graph_execute;

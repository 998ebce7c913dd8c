//! Command-line interface definition for modviz.
//!
//! # Command Structure
//!
//! - `modviz graph` - Render the (optionally filtered) graph as DOT or JSON
//! - `modviz dependents` - List every edge on a chain reaching a module

mod commands;
pub mod enums;

use clap::Parser;
use std::path::PathBuf;

pub use commands::{Command, DependentsArgs, GraphArgs};
pub use enums::*;

/// modviz - visualize Go module dependency graphs
#[derive(Parser, Debug)]
#[command(
    name = "modviz",
    version,
    about = "Render `go mod graph` output as a Graphviz diagram",
    long_about = "modviz reads `module dependency` pairs, as printed by `go mod graph`,\n\
                  and renders them as a Graphviz DOT document. The graph can be narrowed\n\
                  to the modules that transitively depend on a single target module.\n\n\
                  Example:\n  go mod graph | modviz graph | dot -Tsvg -o graph.svg"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a config file (defaults to ./modviz.config.json when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available modviz subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the module graph
    ///
    /// Reads dependency pairs and writes a Graphviz DOT document (or JSON).
    /// With --filter, only modules that transitively depend on the given
    /// module are kept.
    Graph(GraphArgs),

    /// List the edges leading to a module
    ///
    /// Prints every `module -> dependency` edge that lies on some chain
    /// ending at MODULE, one per line.
    Dependents(DependentsArgs),
}

/// Arguments for the graph command
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Input file with `module dependency` pairs (`-` or omitted for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Only keep modules that transitively depend on MODULE
    ///
    /// The name must match exactly, including any `@version` suffix.
    ///
    /// Example:
    ///   modviz graph --filter golang.org/x/text@v0.3.2
    #[arg(short, long, value_name = "MODULE")]
    pub filter: Option<String>,

    /// Write the document to PATH instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output document format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// What to do with lines that lack a dependency
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_malformed: Option<OnMalformed>,

    /// Collapse repeated `module dependency` pairs into one edge
    #[arg(long)]
    pub dedupe: bool,
}

/// Arguments for the dependents command
#[derive(Args, Debug, Clone)]
pub struct DependentsArgs {
    /// Module whose dependents should be listed (exact name, with version)
    #[arg(value_name = "MODULE")]
    pub module: String,

    /// Input file with `module dependency` pairs (`-` or omitted for stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// What to do with lines that lack a dependency
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_malformed: Option<OnMalformed>,

    /// Print edges sorted alphabetically instead of in discovery order
    #[arg(long)]
    pub sorted: bool,
}

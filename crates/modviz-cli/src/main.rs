//! modviz - turn `go mod graph` output into a Graphviz diagram.
//!
//! Parses arguments, initializes logging, and dispatches to a command.

use clap::Parser;
use miette::Result;
use modviz_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let config_path = args.config.as_deref();
    let result = match args.command {
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args, config_path),
        cli::Command::Dependents(dependents_args) => {
            commands::dependents_execute(dependents_args, config_path)
        }
    };

    result.map_err(error::cli_error_to_miette)
}

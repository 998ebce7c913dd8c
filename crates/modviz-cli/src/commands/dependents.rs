//! Dependents command implementation.
//!
//! Prints every edge on a chain that ends at the given module, in the same
//! `module dependency` form `go mod graph` emits, so the result can be fed
//! straight back into `modviz graph`.

use crate::cli::DependentsArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, ModvizConfig};
use crate::error::Result;
use crate::ui;
use modviz_graph::{DependentsFilter, MalformedLinePolicy, parse_edges};
use rustc_hash::FxHashSet;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

/// Execute the dependents command.
///
/// Warns on stderr when nothing depends on the module.
///
/// # Errors
///
/// Returns errors for invalid configuration, unreadable input, malformed
/// lines (under the `error` policy) and failed writes.
pub fn execute(args: DependentsArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ModvizConfig::load(&ConfigOverrides::from(&args), config_path)?;
    let reader = utils::open_input(args.input.as_deref())?;

    let count = run(
        &args.module,
        config.malformed,
        args.sorted,
        reader,
        io::stdout().lock(),
    )?;

    if count == 0 {
        ui::warning(&format!("No module depends on {}", args.module));
    }
    Ok(())
}

/// Write the edges leading to `module`; returns how many were written.
pub fn run<R: BufRead, W: Write>(
    module: &str,
    malformed: MalformedLinePolicy,
    sorted: bool,
    reader: R,
    mut writer: W,
) -> Result<usize> {
    let edges = parse_edges(reader, malformed)?;
    let filter = DependentsFilter::new(&edges);

    let mut found = filter.dependents_of(module);
    if sorted {
        found.sort();
    }

    for edge in &found {
        writeln!(writer, "{} {}", edge.module, edge.dependency)?;
    }
    writer.flush()?;

    let modules: FxHashSet<&str> = found.iter().map(|edge| edge.module.as_str()).collect();
    info!(
        module,
        edges = found.len(),
        modules = modules.len(),
        "listed dependents"
    );
    Ok(found.len())
}

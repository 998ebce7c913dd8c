//! Logging infrastructure for the modviz CLI.
//!
//! Sets up `tracing-subscriber` so that library and CLI events go to
//! stderr. Stdout is reserved for the rendered document, which keeps
//! `go mod graph | modviz graph | dot -Tsvg` pipelines clean.
//!
//! # Example
//!
//! ```rust,no_run
//! use modviz_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Rendering graph");
//! debug!(modules = 12, "built module graph");
//! ```

use crate::ui;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "modviz=debug,modviz_graph=debug,modviz_cli=debug";
const QUIET_FILTER: &str = "modviz=error,modviz_graph=error,modviz_cli=error";
const DEFAULT_FILTER: &str = "modviz=warn,modviz_graph=warn,modviz_cli=warn";

/// Initialize the tracing subscriber with the specified options.
///
/// Call once at program start, before any logging occurs.
///
/// # Verbosity Levels
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for modviz crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable: custom filter
/// 4. Default: WARN for modviz crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && ui::should_use_color())
        .compact();

    // A second initialization (e.g. from tests) is a no-op rather than a panic.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

//! Graph command implementation.
//!
//! Reads `module dependency` pairs, optionally narrows them to the
//! dependents of one module, and writes the graph as DOT or JSON.

use crate::cli::GraphArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, GraphFormat, ModvizConfig};
use crate::error::Result;
use crate::ui;
use modviz_graph::{GraphDocument, GraphStatistics, Renderer};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::info;

/// Execute the graph command.
///
/// # Steps
///
/// 1. Merge CLI flags with `MODVIZ_*` variables and the config file
/// 2. Parse the input, applying the malformed-line policy
/// 3. Apply the reverse dependency filter, if any
/// 4. Write the document to `--output` or stdout
///
/// With `--output`, the document is rendered in memory first, so a failed
/// run leaves an existing file untouched.
///
/// # Errors
///
/// Returns errors for invalid configuration, unreadable input, malformed
/// lines (under the `error` policy) and failed writes.
pub fn execute(args: GraphArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ModvizConfig::load(&ConfigOverrides::from(&args), config_path)?;
    let reader = utils::open_input(args.input.as_deref())?;

    let stats = match &config.output {
        Some(path) => {
            let mut document = Vec::new();
            let stats = run(&config, reader, &mut document)?;

            let mut writer = utils::open_output(path)?;
            writer.write_all(&document)?;
            writer.flush()?;

            ui::success(&format!(
                "Wrote {} modules and {} edges to {}",
                stats.module_count,
                stats.edge_count,
                path.display()
            ));
            stats
        }
        None => run(&config, reader, io::stdout().lock())?,
    };

    if stats.module_count == 0 {
        match config.filter.as_deref().filter(|f| !f.is_empty()) {
            Some(target) => ui::warning(&format!("No module depends on {target}")),
            None => ui::warning("Input contained no dependency edges"),
        }
    }

    Ok(())
}

/// Build the graph from `reader` and write the document to `writer`.
pub fn run<R: BufRead, W: Write>(
    config: &ModvizConfig,
    reader: R,
    mut writer: W,
) -> Result<GraphStatistics> {
    let graph = config.pipeline().run(reader)?;

    match config.format {
        GraphFormat::Dot => Renderer::new()?.render_to(&graph, &mut writer)?,
        GraphFormat::Json => {
            let json = GraphDocument::from_graph(&graph).to_pretty_json()?;
            writeln!(writer, "{json}")?;
        }
    }
    writer.flush()?;

    let stats = graph.statistics();
    info!(
        modules = stats.module_count,
        edges = stats.edge_count,
        format = ?config.format,
        "graph written"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use modviz_graph::MalformedLinePolicy;

    const SAMPLE: &str = "github.com/poloxue/testmod golang.org/x/text@v0.3.2
github.com/poloxue/testmod rsc.io/quote/v3@v3.1.0
github.com/poloxue/testmod rsc.io/sampler@v1.3.1
golang.org/x/text@v0.3.2 golang.org/x/tools@v0.0.0-20180917221912-90fa682c2a6e
rsc.io/quote/v3@v3.1.0 rsc.io/sampler@v1.3.0
rsc.io/sampler@v1.3.1 golang.org/x/text@v0.0.0-20170915032832-14c0d48ead0c
rsc.io/sampler@v1.3.0 golang.org/x/text@v0.0.0-20170915032832-14c0d48ead0c
";

    fn render(config: &ModvizConfig, input: &str) -> Result<String> {
        let mut out = Vec::new();
        run(config, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_dot_output() {
        let dot = render(&ModvizConfig::default(), SAMPLE).unwrap();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.contains("1 [label=\"github.com/poloxue/testmod\"];"));
        assert!(dot.contains("1 -> 2;"));
        assert!(!dot.contains("rankdir"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_filtered_output() {
        let config = ModvizConfig {
            filter: Some("rsc.io/sampler@v1.3.0".to_string()),
            ..ModvizConfig::default()
        };
        let dot = render(&config, SAMPLE).unwrap();
        assert!(dot.contains("1 [label=\"github.com/poloxue/testmod\"];"));
        assert!(dot.contains("2 [label=\"rsc.io/quote/v3@v3.1.0\"];"));
        assert!(dot.contains("3 [label=\"rsc.io/sampler@v1.3.0\"];"));
        assert!(dot.contains("1 -> 2;"));
        assert!(dot.contains("2 -> 3;"));
        assert!(!dot.contains("golang.org/x/text"));
    }

    #[test]
    fn test_filter_without_dependents_is_empty_digraph() {
        let config = ModvizConfig {
            filter: Some("github.com/poloxue/testmod".to_string()),
            ..ModvizConfig::default()
        };
        assert_eq!(
            render(&config, SAMPLE).unwrap(),
            "digraph {\nnode [shape=box];\n}\n"
        );
    }

    #[test]
    fn test_json_output() {
        let config = ModvizConfig {
            format: GraphFormat::Json,
            ..ModvizConfig::default()
        };
        let json = render(&config, "a b\nb c\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layout"], "default");
        assert_eq!(value["modules"].as_array().unwrap().len(), 3);
        assert_eq!(value["edges"][0]["from"], 1);
        assert_eq!(value["edges"][0]["to"], 2);
    }

    #[test]
    fn test_malformed_line_fails_by_default() {
        let err = render(&ModvizConfig::default(), "a b\nlonely\n").unwrap_err();
        assert!(matches!(
            err,
            CliError::Graph(modviz_graph::Error::MalformedLine { line: 2, .. })
        ));
    }

    #[test]
    fn test_malformed_line_skipped() {
        let config = ModvizConfig {
            malformed: MalformedLinePolicy::Skip,
            ..ModvizConfig::default()
        };
        let dot = render(&config, "a b\nlonely\n").unwrap();
        assert!(dot.contains("1 -> 2;"));
        assert!(!dot.contains("lonely"));
    }

    #[test]
    fn test_statistics_returned() {
        let mut out = Vec::new();
        let stats = run(&ModvizConfig::default(), SAMPLE.as_bytes(), &mut out).unwrap();
        assert_eq!(stats.module_count, 7);
        assert_eq!(stats.edge_count, 7);
    }
}

//! Miette diagnostic conversion for CLI errors.

use crate::error::{CliError, ConfigError};
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Graph(e) => graph_error_to_miette(e),
        CliError::Config(ConfigError::InvalidValue { field, value, hint }) => {
            miette::miette!(
                help = hint,
                "Invalid value for '{}' in configuration: {:?}",
                field,
                value
            )
        }
        _ => miette::miette!("{}", err),
    }
}

/// Convert a graph pipeline error to a miette Report with a hint
pub fn graph_error_to_miette(err: modviz_graph::Error) -> Report {
    match err {
        modviz_graph::Error::MalformedLine { line, content } => miette::miette!(
            help = "Each line must be `<module> <dependency>`, as printed by `go mod graph`. \
                    Pass --on-malformed skip to ignore such lines",
            "Malformed input on line {}: {:?}",
            line,
            content
        ),
        modviz_graph::Error::Read(io_err) => miette::miette!(
            help = "The input must be readable UTF-8 text",
            "Failed to read input: {}",
            io_err
        ),
        other => miette::miette!("{}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_line_report_mentions_line() {
        let report = cli_error_to_miette(CliError::Graph(modviz_graph::Error::MalformedLine {
            line: 7,
            content: "lonely".to_string(),
        }));
        let msg = report.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("lonely"));
    }

    #[test]
    fn test_other_errors_keep_message() {
        let report = cli_error_to_miette(CliError::Custom("bad flag".to_string()));
        assert_eq!(report.to_string(), "bad flag");
    }
}

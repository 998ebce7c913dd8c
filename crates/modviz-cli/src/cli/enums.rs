use clap::ValueEnum;

/// Output document format
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Graphviz DOT, ready for `dot -Tsvg`
    #[value(name = "dot")]
    Dot,

    /// JSON document with modules, edges and layout hint
    #[value(name = "json")]
    Json,
}

/// Handling of input lines with fewer than two tokens
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum OnMalformed {
    /// Stop and report the offending line
    #[value(name = "error")]
    Error,

    /// Log a warning and ignore the line
    #[value(name = "skip")]
    Skip,
}

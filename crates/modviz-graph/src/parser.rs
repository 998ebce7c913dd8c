//! Line-oriented parser for `module dependency` pairs.
//!
//! The accepted format is the one printed by `go mod graph`: one edge per
//! line, the requiring module first and the required module second,
//! separated by whitespace. Anything after the second token is ignored.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Edge, Error, Result};

/// What to do with a non-empty line that has fewer than two tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    /// Abort parsing with [`Error::MalformedLine`].
    #[default]
    Error,
    /// Log a warning and continue with the next line.
    Skip,
}

/// Parse every edge from `reader`, in input order.
///
/// Blank lines are ignored. A read failure (including invalid UTF-8) aborts
/// with [`Error::Read`] and no partial result is returned.
pub fn parse_edges<R: BufRead>(reader: R, policy: MalformedLinePolicy) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            LineKind::Blank => {}
            LineKind::Edge(edge) => edges.push(edge),
            LineKind::Malformed => match policy {
                MalformedLinePolicy::Error => {
                    return Err(Error::MalformedLine {
                        line: index + 1,
                        content: line.trim().to_string(),
                    });
                }
                MalformedLinePolicy::Skip => {
                    warn!(line = index + 1, content = line.trim(), "skipping malformed line");
                    skipped += 1;
                }
            },
        }
    }

    debug!(edges = edges.len(), skipped, "parsed dependency pairs");
    Ok(edges)
}

/// Parse edges from an in-memory string.
pub fn parse_str(input: &str, policy: MalformedLinePolicy) -> Result<Vec<Edge>> {
    parse_edges(input.as_bytes(), policy)
}

enum LineKind {
    Blank,
    Edge(Edge),
    Malformed,
}

fn parse_line(line: &str) -> LineKind {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (None, _) => LineKind::Blank,
        (Some(module), Some(dependency)) => LineKind::Edge(Edge::new(module, dependency)),
        (Some(_), None) => LineKind::Malformed,
    }
}

//! # modviz-graph
//!
//! Pure graph data structures for module dependency graphs.
//!
//! This crate turns `module dependency` text pairs (the output of
//! `go mod graph`) into a numbered graph and renders it as a Graphviz DOT
//! document. It has no process-level side effects: reading happens through
//! any [`std::io::BufRead`] and rendering produces a `String` or writes to
//! any [`std::io::Write`].
//!
//! ## Architecture
//!
//! ```text
//!   text ──► parser ──► Vec<Edge> ──► filter (optional) ──► builder ──► render
//!                                         │                    │
//!                                  dependents of T       ModuleGraph
//!                                                     (ids + adjacency)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use modviz_graph::{ModuleGraph, Renderer, parse_str, MalformedLinePolicy};
//!
//! # fn main() -> modviz_graph::Result<()> {
//! let edges = parse_str("app lib@v1.0.0\nlib@v1.0.0 util@v0.2.0\n", MalformedLinePolicy::Error)?;
//! let graph = ModuleGraph::from_edges(&edges);
//!
//! let dot = Renderer::new()?.render(&graph)?;
//! assert!(dot.contains("1 -> 2;"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Restricting to dependents
//!
//! ```rust
//! use modviz_graph::{Edge, filter_dependents};
//!
//! let edges = vec![Edge::new("a", "b"), Edge::new("b", "c"), Edge::new("x", "y")];
//! let chain = filter_dependents(&edges, "c");
//! assert_eq!(chain, vec![Edge::new("b", "c"), Edge::new("a", "b")]);
//! ```

pub mod builder;
pub mod edge;
pub mod filter;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use builder::{GraphStatistics, ModuleGraph, ModuleId};
pub use edge::Edge;
pub use filter::{DependentsFilter, filter_dependents, users_of};
pub use parser::{MalformedLinePolicy, parse_edges, parse_str};
pub use pipeline::{Pipeline, order_by_version_markers};
pub use render::{GraphDocument, Layout, Renderer, WIDE_LAYOUT_THRESHOLD};

/// Error types for modviz graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input stream could not be read to completion.
    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),

    /// An input line did not contain a module and a dependency.
    #[error("Malformed line {line}: expected `<module> <dependency>`, got {content:?}")]
    MalformedLine {
        /// 1-based line number in the input stream.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },

    /// The output document could not be produced or written.
    #[error("Failed to render graph: {0}")]
    Render(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Error::Render(err.to_string())
    }
}

/// Result type alias for modviz graph operations.
pub type Result<T> = std::result::Result<T, Error>;

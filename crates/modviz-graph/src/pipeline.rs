//! Parse → filter → build, configured once.

use std::io::BufRead;

use tracing::{debug, info};

use crate::{Edge, MalformedLinePolicy, ModuleGraph, Result, filter_dependents, parse_edges};

/// Options for turning raw input into a [`ModuleGraph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    /// Restrict the graph to modules that transitively depend on this one.
    /// `None` or an empty string keeps the whole graph.
    pub filter: Option<String>,
    pub malformed: MalformedLinePolicy,
    /// Drop repeated `(module, dependency)` pairs while building.
    pub dedupe: bool,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, target: impl Into<String>) -> Self {
        self.filter = Some(target.into());
        self
    }

    pub fn malformed(mut self, policy: MalformedLinePolicy) -> Self {
        self.malformed = policy;
        self
    }

    pub fn dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    fn target(&self) -> Option<&str> {
        self.filter.as_deref().filter(|target| !target.is_empty())
    }

    /// Parse `reader` and apply the filter, without building the graph.
    ///
    /// With a filter, the surviving edges are ordered by how many `@`
    /// version markers their source carries, so the unversioned main module
    /// is numbered first.
    pub fn edges<R: BufRead>(&self, reader: R) -> Result<Vec<Edge>> {
        let edges = parse_edges(reader, self.malformed)?;

        let Some(target) = self.target() else {
            return Ok(edges);
        };

        let mut filtered = filter_dependents(&edges, target);
        order_by_version_markers(&mut filtered);
        debug!(
            before = edges.len(),
            after = filtered.len(),
            module = target,
            "applied reverse dependency filter"
        );
        Ok(filtered)
    }

    /// Run every stage and return the built graph.
    pub fn run<R: BufRead>(&self, reader: R) -> Result<ModuleGraph> {
        let edges = self.edges(reader)?;
        let graph = if self.dedupe {
            ModuleGraph::from_edges_deduped(&edges)
        } else {
            ModuleGraph::from_edges(&edges)
        };

        info!(
            modules = graph.module_count(),
            edges = graph.edge_count(),
            filtered = self.target().is_some(),
            "module graph ready"
        );
        Ok(graph)
    }
}

/// Stable sort by the number of `@` characters in each edge's source.
pub fn order_by_version_markers(edges: &mut [Edge]) {
    edges.sort_by_key(|edge| edge.module.matches('@').count());
}

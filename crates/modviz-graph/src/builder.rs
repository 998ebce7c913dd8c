//! Numbered graph construction.
//!
//! [`ModuleGraph::from_edges`] walks the edge list once, handing out
//! identifiers in first-seen order (starting at 1) and appending every
//! dependency identifier to its source's adjacency list.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Edge;

/// Identifier of a module within one [`ModuleGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(usize);

impl ModuleId {
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ModuleId> for usize {
    fn from(id: ModuleId) -> Self {
        id.0
    }
}

/// Module names mapped to identifiers, plus identifier adjacency lists.
///
/// Read-only after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleGraph {
    ids: IndexMap<String, ModuleId>,
    dependencies: IndexMap<ModuleId, Vec<ModuleId>>,
}

impl ModuleGraph {
    /// Build the graph, keeping every edge including repeats.
    pub fn from_edges(edges: &[Edge]) -> Self {
        Self::build(edges, false)
    }

    /// Build the graph, keeping only the first occurrence of each
    /// `(module, dependency)` pair.
    pub fn from_edges_deduped(edges: &[Edge]) -> Self {
        Self::build(edges, true)
    }

    fn build(edges: &[Edge], dedupe: bool) -> Self {
        let mut graph = Self::default();
        let mut seen: FxHashSet<(ModuleId, ModuleId)> = FxHashSet::default();
        let mut dropped = 0usize;

        for edge in edges {
            let from = graph.intern(&edge.module);
            let to = graph.intern(&edge.dependency);

            if dedupe && !seen.insert((from, to)) {
                dropped += 1;
                continue;
            }

            graph.dependencies.entry(from).or_default().push(to);
        }

        debug!(
            modules = graph.module_count(),
            edges = graph.edge_count(),
            dropped,
            "built module graph"
        );
        graph
    }

    fn intern(&mut self, name: &str) -> ModuleId {
        if let Some(id) = self.ids.get(name) {
            return *id;
        }
        let id = ModuleId(self.ids.len() + 1);
        self.ids.insert(name.to_string(), id);
        id
    }

    /// Identifier assigned to `name`, if it appears in the graph.
    pub fn id_of(&self, name: &str) -> Option<ModuleId> {
        self.ids.get(name).copied()
    }

    /// Module name carrying `id`.
    pub fn name_of(&self, id: ModuleId) -> Option<&str> {
        // Identifiers are dense and assigned in insertion order.
        self.ids
            .get_index(id.0.checked_sub(1)?)
            .map(|(name, _)| name.as_str())
    }

    /// Dependencies recorded for `id`, in edge-list order. Empty for leaves.
    pub fn dependencies_of(&self, id: ModuleId) -> &[ModuleId] {
        self.dependencies
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All modules in identifier order.
    pub fn modules(&self) -> impl Iterator<Item = (ModuleId, &str)> {
        self.ids.iter().map(|(name, id)| (*id, name.as_str()))
    }

    /// All adjacency entries, ordered by source identifier and then by
    /// position in the source's adjacency list.
    pub fn edges(&self) -> Vec<(ModuleId, ModuleId)> {
        let mut sources: Vec<_> = self.dependencies.keys().copied().collect();
        sources.sort_unstable();
        sources
            .into_iter()
            .flat_map(|from| self.dependencies_of(from).iter().map(move |to| (from, *to)))
            .collect()
    }

    /// Number of distinct modules.
    pub fn module_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.dependencies.values().map(Vec::len).sum()
    }

    /// Number of modules with at least one outgoing edge.
    pub fn source_count(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn statistics(&self) -> GraphStatistics {
        let self_loops = self
            .dependencies
            .iter()
            .map(|(from, deps)| deps.iter().filter(|to| *to == from).count())
            .sum();

        GraphStatistics {
            module_count: self.module_count(),
            edge_count: self.edge_count(),
            source_count: self.source_count(),
            leaf_count: self.module_count() - self.source_count(),
            self_loops,
        }
    }
}

/// Summary counts for a [`ModuleGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub module_count: usize,
    pub edge_count: usize,
    pub source_count: usize,
    /// Modules without outgoing edges.
    pub leaf_count: usize,
    pub self_loops: usize,
}

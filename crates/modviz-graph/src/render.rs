//! Graphviz DOT rendering.
//!
//! The document is produced from a `minijinja` template over a
//! [`GraphDocument`], the same serializable view used for JSON output.
//! Declarations are always emitted in identifier order so the output is
//! byte-for-byte reproducible.

use std::io::Write;

use minijinja::Environment;
use serde::{Deserialize, Serialize};

use crate::{Error, ModuleGraph, ModuleId, Result};

/// Source-node count above which the graph is laid out left-to-right.
pub const WIDE_LAYOUT_THRESHOLD: usize = 15;

const TEMPLATE_NAME: &str = "graph.dot";

const GRAPH_TEMPLATE: &str = r#"digraph {
{% if layout == "wide" %}rankdir=LR;
{% endif %}node [shape=box];
{% for module in modules %}{{ module.id }} [label="{{ module.name | dot_escape }}"];
{% endfor %}{% for edge in edges %}{{ edge.from }} -> {{ edge.to }};
{% endfor %}}
"#;

/// Layout hint derived from the graph's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Top-to-bottom, Graphviz's default.
    #[default]
    Default,
    /// Left-to-right (`rankdir=LR`).
    Wide,
}

impl Layout {
    pub fn from_graph(graph: &ModuleGraph) -> Self {
        if graph.source_count() > WIDE_LAYOUT_THRESHOLD {
            Layout::Wide
        } else {
            Layout::Default
        }
    }
}

/// One node declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub id: ModuleId,
    pub name: String,
}

/// One edge declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: ModuleId,
    pub to: ModuleId,
}

/// Serializable, ordered view of a [`ModuleGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub layout: Layout,
    pub modules: Vec<ModuleEntry>,
    pub edges: Vec<EdgeEntry>,
}

impl GraphDocument {
    pub fn from_graph(graph: &ModuleGraph) -> Self {
        Self {
            layout: Layout::from_graph(graph),
            modules: graph
                .modules()
                .map(|(id, name)| ModuleEntry {
                    id,
                    name: name.to_string(),
                })
                .collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(from, to)| EdgeEntry { from, to })
                .collect(),
        }
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Render(e.to_string()))
    }
}

/// DOT renderer with a pre-compiled template.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_filter("dot_escape", dot_escape);
        env.add_template(TEMPLATE_NAME, GRAPH_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render `graph` to a DOT string.
    pub fn render(&self, graph: &ModuleGraph) -> Result<String> {
        let document = GraphDocument::from_graph(graph);
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(&document)?)
    }

    /// Render `graph` directly into `writer`.
    pub fn render_to<W: Write>(&self, graph: &ModuleGraph, writer: W) -> Result<()> {
        let document = GraphDocument::from_graph(graph);
        let template = self.env.get_template(TEMPLATE_NAME)?;
        template.render_to_write(&document, writer)?;
        Ok(())
    }
}

fn dot_escape(value: String) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

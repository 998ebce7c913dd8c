use serde::{Deserialize, Serialize};

/// Document format written by `modviz graph`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// Pretty-printed JSON document
    Json,
}

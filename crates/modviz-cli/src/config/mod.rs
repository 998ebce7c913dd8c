//! Configuration system for modviz with multi-source loading.
//!
//! Merges settings from CLI args, environment variables, and config files.
//! Priority: CLI > Environment > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod types;
mod validation;

use modviz_graph::{MalformedLinePolicy, Pipeline};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::ConfigOverrides;
pub use types::*;

/// modviz configuration - loaded from modviz.config.json, `MODVIZ_*`
/// environment variables and CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModvizConfig {
    /// Keep only modules that transitively depend on this module
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// Output document format (dot, json)
    #[serde(default = "default_format")]
    pub format: GraphFormat,

    /// Handling of lines without a dependency (error, skip)
    #[serde(default = "default_malformed")]
    pub malformed: MalformedLinePolicy,

    /// Collapse repeated edges
    #[serde(default)]
    pub dedupe: bool,

    /// Output file; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for ModvizConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl ModvizConfig {
    /// Graph pipeline configured from this config.
    pub fn pipeline(&self) -> Pipeline {
        let mut pipeline = Pipeline::new()
            .malformed(self.malformed)
            .dedupe(self.dedupe);
        if let Some(filter) = &self.filter {
            pipeline = pipeline.filter(filter.clone());
        }
        pipeline
    }
}

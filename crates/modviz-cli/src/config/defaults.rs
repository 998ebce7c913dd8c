use super::types::GraphFormat;
use modviz_graph::MalformedLinePolicy;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "modviz.config.json";

/// Prefix for environment variable overrides (`MODVIZ_FILTER`, ...).
pub const ENV_PREFIX: &str = "MODVIZ_";

pub fn default_format() -> GraphFormat {
    GraphFormat::Dot
}

pub fn default_malformed() -> MalformedLinePolicy {
    MalformedLinePolicy::Error
}

use crate::cli::{DependentsArgs, GraphArgs};
use crate::config::{DEFAULT_CONFIG_FILE, ENV_PREFIX, GraphFormat, ModvizConfig};
use crate::error::{ConfigError, Result};
use figment::{
    Figment,
    providers::{Env, Format as _, Json, Serialized},
};
use modviz_graph::MalformedLinePolicy;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Keys accepted from `MODVIZ_*` environment variables.
const ENV_KEYS: [&str; 5] = ["filter", "format", "malformed", "dedupe", "output"];

/// Values given explicitly on the command line.
///
/// Only fields that are `Some` are merged, so an omitted flag never
/// overrides the config file or environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<GraphFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub malformed: Option<MalformedLinePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedupe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl From<&GraphArgs> for ConfigOverrides {
    fn from(args: &GraphArgs) -> Self {
        Self {
            filter: args.filter.clone(),
            format: args.format.map(Into::into),
            malformed: args.on_malformed.map(Into::into),
            dedupe: args.dedupe.then_some(true),
            output: args.output.clone(),
        }
    }
}

impl From<&DependentsArgs> for ConfigOverrides {
    fn from(args: &DependentsArgs) -> Self {
        Self {
            filter: Some(args.module.clone()),
            malformed: args.on_malformed.map(Into::into),
            ..Self::default()
        }
    }
}

impl ModvizConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default_config()));

        let config_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                default_path.exists().then(|| default_path.to_path_buf())
            }
        };

        if let Some(path) = config_file {
            debug!(path = %path.display(), "merging config file");
            figment = figment.merge(Json::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).only(&ENV_KEYS));
        figment = figment.merge(Serialized::defaults(overrides));

        let config: Self = figment
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Get default configuration values.
    pub(crate) fn default_config() -> Self {
        use crate::config::defaults::*;

        Self {
            filter: None,
            format: default_format(),
            malformed: default_malformed(),
            dedupe: false,
            output: None,
        }
    }
}

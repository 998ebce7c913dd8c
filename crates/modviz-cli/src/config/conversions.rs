use super::types::GraphFormat;
use crate::cli::{OnMalformed, OutputFormat};
use modviz_graph::MalformedLinePolicy;

impl From<OutputFormat> for GraphFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Dot => GraphFormat::Dot,
            OutputFormat::Json => GraphFormat::Json,
        }
    }
}

impl From<OnMalformed> for MalformedLinePolicy {
    fn from(policy: OnMalformed) -> Self {
        match policy {
            OnMalformed::Error => MalformedLinePolicy::Error,
            OnMalformed::Skip => MalformedLinePolicy::Skip,
        }
    }
}

use crate::config::ModvizConfig;
use crate::error::{ConfigError, Result};

/// Validate a module name used as a filter target.
///
/// Module names are single whitespace-free tokens, exactly as they appear
/// in `go mod graph` output.
pub fn validate_module_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Ok(());
    }

    if name.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidValue {
            field: "filter".to_string(),
            value: name.to_string(),
            hint: "Module names cannot contain whitespace; use the exact name from \
                   `go mod graph`, e.g. golang.org/x/text@v0.3.2"
                .to_string(),
        }
        .into());
    }

    Ok(())
}

impl ModvizConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.filter {
            validate_module_name(filter)?;
        }

        if self.output.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "output".to_string(),
                value: String::new(),
                hint: "Omit the output path to write to stdout".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

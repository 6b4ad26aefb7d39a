//! Configuration file support for sba-view.
//!
//! Provides YAML-based configuration through `sba-view.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::instance_registry::domain::GroupingType;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sba-view.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Monitoring server used when neither `--file` nor `--url` is given
    pub server_url: Option<String>,
    /// Default `--bean` patterns
    pub bean_patterns: Option<Vec<String>>,
    /// Default `--group-by`
    pub group_by: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured format; validated on load
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format.as_deref().and_then(|f| f.parse().ok())
    }

    /// The configured grouping; validated on load
    pub fn grouping(&self) -> Option<GroupingType> {
        self.group_by.as_deref().and_then(|g| g.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: format: {}", e);
        }
    }

    if let Some(ref group_by) = config.group_by {
        if let Err(e) = group_by.parse::<GroupingType>() {
            bail!("Invalid config: group_by: {}", e);
        }
    }

    if let Some(ref server_url) = config.server_url {
        let url = server_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!(
                "Invalid config: server_url must start with http:// or https://\n\n\
                 💡 Hint: Use the base URL of the monitoring server (e.g., \"http://localhost:8080\")."
            );
        }
    }

    if let Some(ref patterns) = config.bean_patterns {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: bean_patterns[{}] must not be empty.\n\n\
                     💡 Hint: Each entry is a bean name or a pattern with '*' wildcards (e.g., \"*Repository\").",
                    i
                );
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

//! CLI configuration.

use anyhow::{Context, Result};
use petal_core::AppConfig;
use petal_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Application configuration.
    #[serde(default)]
    pub app: AppConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format from the file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Generate a default petal.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Petal site configuration

[app]
name = "{name}"
lang = "en"
default_title = "Petal"
# css_path = "/styles.css"

[logging]
# RUST_LOG overrides this when set.
level = "info"
format = "human"
"#,
        name = name
    )
}

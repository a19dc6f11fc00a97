//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, searched in each directory from the working directory up.
pub const CONFIG_NAMES: [&str; 3] = ["petal.toml", ".petal.toml", "petal.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }
}

/// Find the nearest config file in `start` or its ancestors.
pub fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some((config_path, config));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

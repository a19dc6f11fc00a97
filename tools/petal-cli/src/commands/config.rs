//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;
use petal_core::AppConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.info("No config file found, using defaults"),
    }

    // App section
    ctx.output.info("");
    ctx.output.info("[app]");
    ctx.output.kv("name", &ctx.config.app.name);
    ctx.output.kv("lang", &ctx.config.app.lang);
    ctx.output.kv("default_title", &ctx.config.app.default_title);
    if let Some(ref css) = ctx.config.app.css_path {
        ctx.output.kv("css_path", css);
    }

    // Logging section
    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level.to_string());
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(path);

    if config_path.exists() && !force {
        ctx.output
            .warn(&format!("Config file already exists: {}", config_path.display()));

        let confirmed = Confirm::new()
            .with_prompt("Overwrite it?")
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Init cancelled");
            return Ok(());
        }
    }

    let name = site_name(&ctx.cwd);
    let target = config_path.to_string_lossy();

    if path.ends_with(".json") {
        let config = CliConfig {
            app: AppConfig::new(name),
            ..Default::default()
        };
        config.save(&target)?;
    } else {
        fs::write(&config_path, generate_default_config(&name))?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn site_name(cwd: &Path) -> String {
    cwd.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("petal-site")
        .to_string()
}

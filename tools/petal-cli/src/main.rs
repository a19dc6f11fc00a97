//! Petal CLI - Command line tool for the Petal site.
//!
//! Commands:
//! - `petal routes` - List the route table
//! - `petal render <path>` - Render a page as a full HTML document
//! - `petal click <path>` - Mount a page, click a bound element, show patches
//! - `petal config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use petal_observability::{init_logging, LogLevel};

use commands::{ClickArgs, ConfigArgs, RenderArgs, RoutesArgs};

/// Petal CLI - Render and drive Petal pages from the terminal
#[derive(Parser)]
#[command(name = "petal")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes
    Routes(RoutesArgs),

    /// Render a page as an HTML document
    Render(RenderArgs),

    /// Click an element on a page and show the resulting updates
    Click(ClickArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.with_level(LogLevel::Debug);
    }
    init_logging(&logging)?;

    if let Some(path) = &ctx.config_path {
        tracing::debug!(path = %path.display(), "config loaded");
    }

    // Execute command
    let result = match cli.command {
        Commands::Routes(args) => commands::routes::run(args, &ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Click(args) => commands::click::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

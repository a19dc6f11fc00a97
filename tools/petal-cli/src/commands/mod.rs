//! CLI command implementations.

pub mod click;
pub mod config;
pub mod render;
pub mod routes;

use clap::{Args, Subcommand};

/// Arguments for the routes command.
#[derive(Args)]
pub struct RoutesArgs {
    /// Resolve a path against the table instead of listing it.
    #[arg(short, long)]
    pub resolve: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Request path (e.g., "/metadata").
    #[arg(default_value = "/")]
    pub path: String,

    /// Print only the page markup, without the document shell.
    #[arg(long)]
    pub fragment: bool,

    /// Write the output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the click command.
#[derive(Args)]
pub struct ClickArgs {
    /// Request path of the page to mount.
    #[arg(default_value = "/")]
    pub path: String,

    /// Number of clicks, each followed by a render pass.
    #[arg(short = 'n', long, default_value = "1")]
    pub times: usize,

    /// Tag of the element to click (first match in document order).
    #[arg(short, long, default_value = "button")]
    pub target: String,

    /// Queue every click before a single render pass.
    #[arg(long)]
    pub batch: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Config file to create (.toml or .json).
        #[arg(short, long, default_value = "petal.toml")]
        path: String,

        /// Overwrite an existing file without asking.
        #[arg(short, long)]
        force: bool,
    },
}

//! Page rendering.

use std::fs;

use anyhow::{Context as _, Result};

use super::RenderArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mut host = petal_pages::host(&ctx.config.app)?;
    let tree = host.navigate(&args.path)?;

    let html = if args.fragment {
        tree.to_html()
    } else {
        host.render_document()?
    };

    if let Some(route) = host.current_route() {
        ctx.output
            .debug(&format!("{} -> {} ({})", args.path, route.pattern, route.name));
    }

    if let Some(path) = &args.output {
        fs::write(path, &html).with_context(|| format!("Failed to write {}", path))?;
        ctx.output.success(&format!("Wrote {} bytes to {}", html.len(), path));
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "path": args.path,
            "route": host.current_route(),
            "params": host.params(),
            "head": host.head(),
            "tree": host.tree(),
            "html": html,
        }));
        return Ok(());
    }

    ctx.output.raw(&html);
    Ok(())
}

//! Drive a page through click events.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use petal_render::{Patch, RenderHost};
use serde::Serialize;

use super::ClickArgs;
use crate::context::Context;
use crate::output::{format_micros, op_badge};

/// One render pass and the patches it applied.
#[derive(Serialize)]
struct PassReport {
    clicks: usize,
    patches: Vec<Patch>,
}

#[derive(Serialize)]
struct ClickReport<'a> {
    path: &'a str,
    target: Vec<usize>,
    passes: Vec<PassReport>,
    html: String,
    metrics: Option<&'a petal_observability::RenderMetrics>,
    generated_at: DateTime<Utc>,
}

/// Run the click command.
pub fn run(args: ClickArgs, ctx: &Context) -> Result<()> {
    let mut host = petal_pages::host(&ctx.config.app)?;
    host.navigate(&args.path)?;

    let target = find_target(&host, &args.target)?;
    ctx.output
        .debug(&format!("Clicking <{}> at {:?}", args.target, target));

    let mut passes = Vec::new();
    if args.batch {
        for _ in 0..args.times {
            host.click(&target)?;
        }
        passes.push(PassReport {
            clicks: args.times,
            patches: host.flush()?,
        });
    } else {
        for _ in 0..args.times {
            host.click(&target)?;
            passes.push(PassReport {
                clicks: 1,
                patches: host.flush()?,
            });
        }
    }

    let html = host.tree().map(|tree| tree.to_html()).unwrap_or_default();

    if ctx.output.is_json() {
        ctx.output.json(&ClickReport {
            path: &args.path,
            target,
            passes,
            html,
            metrics: host.metrics(),
            generated_at: Utc::now(),
        });
        return Ok(());
    }

    ctx.output.header(&format!("Clicking <{}> on {}", args.target, args.path));

    let total = passes.len();
    for (i, pass) in passes.iter().enumerate() {
        ctx.output.step(
            i + 1,
            total,
            &format!("{} click(s), {} patch(es)", pass.clicks, pass.patches.len()),
        );
        for patch in &pass.patches {
            ctx.output.list_item(&format!(
                "{} at {:?}",
                op_badge(patch.op.name()),
                patch.path
            ));
        }
    }

    if let Some(metrics) = host.metrics() {
        ctx.output.info("");
        ctx.output.kv("render passes", &metrics.passes.to_string());
        ctx.output.kv("patches", &metrics.patches.to_string());
        if let Some(mean) = metrics.mean_render_us() {
            ctx.output.kv("mean render", &format_micros(mean));
        }
    }

    ctx.output.info("");
    ctx.output.raw(&html);
    Ok(())
}

fn find_target(host: &RenderHost, tag: &str) -> Result<Vec<usize>> {
    let Some(tree) = host.tree() else {
        bail!("No page mounted");
    };

    match tree.find(|el| el.tag == tag) {
        Some(path) => Ok(path),
        None => bail!("No <{}> element on this page", tag),
    }
}

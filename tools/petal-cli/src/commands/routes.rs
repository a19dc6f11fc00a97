//! Route table listing.

use anyhow::Result;
use serde::Serialize;

use super::RoutesArgs;
use crate::context::Context;

#[derive(Serialize)]
struct RouteListing<'a> {
    routes: Vec<&'a petal_router::RouteMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<&'a petal_router::RouteMeta>,
}

#[derive(Serialize)]
struct Resolution<'a> {
    path: &'a str,
    pattern: &'a str,
    name: &'a str,
    params: &'a petal_router::RouteParams,
    is_fallback: bool,
}

/// Run the routes command.
pub fn run(args: RoutesArgs, ctx: &Context) -> Result<()> {
    let table = petal_pages::routes()?;

    if let Some(path) = args.resolve.as_deref() {
        let matched = table.resolve(path)?;

        if ctx.output.is_json() {
            ctx.output.json(&Resolution {
                path,
                pattern: &matched.meta.pattern,
                name: &matched.meta.name,
                params: &matched.params,
                is_fallback: matched.is_fallback,
            });
            return Ok(());
        }

        ctx.output.header(&format!("Resolving {}", path));
        ctx.output.kv("pattern", &matched.meta.pattern);
        ctx.output.kv("component", &matched.meta.name);
        for (name, value) in &matched.params {
            ctx.output.kv(&format!("param {}", name), value);
        }
        if matched.is_fallback {
            ctx.output.warn("No route matched, using fallback");
        }
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&RouteListing {
            routes: table.routes(),
            fallback: table.fallback(),
        });
        return Ok(());
    }

    ctx.output.header(&format!("Routes ({})", table.len()));

    let width = table
        .routes()
        .iter()
        .map(|r| r.pattern.len())
        .max()
        .unwrap_or(0)
        .max("PATTERN".len());

    ctx.output.table_row(&["PATTERN", "COMPONENT"], &[width, 0]);
    for route in table.routes() {
        ctx.output
            .table_row(&[route.pattern.as_str(), route.name.as_str()], &[width, 0]);
    }

    if let Some(fallback) = table.fallback() {
        ctx.output.info("");
        ctx.output.kv("fallback", &fallback.name);
    }

    Ok(())
}

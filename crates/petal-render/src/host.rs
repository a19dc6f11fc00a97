//! The render host: mounts pages and drives their update loop.

use std::time::Instant;

use petal_core::{Component, EventKind, HeadContent, Node, PetalError};
use petal_observability::RenderMetrics;
use petal_router::{RouteMeta, RouteParams, RouteTable};
use petal_shell::Document;
use serde::Serialize;

use crate::{apply, diff, Patch, RenderError};

/// Phase of the host with respect to the mounted page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HostPhase {
    /// Nothing mounted.
    Unmounted,
    /// Displaying the current state.
    Idle,
    /// State updates requested, next render pass not yet applied.
    UpdatePending,
}

struct Mounted {
    path: String,
    route: RouteMeta,
    params: RouteParams,
    component: Box<dyn Component>,
    tree: Node,
    metrics: RenderMetrics,
}

/// Owns the route table, the document shell, and at most one mounted page.
pub struct RenderHost {
    routes: RouteTable,
    document: Document,
    mounted: Option<Mounted>,
}

impl RenderHost {
    pub fn new(routes: RouteTable, document: Document) -> Self {
        Self {
            routes,
            document,
            mounted: None,
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn phase(&self) -> HostPhase {
        match &self.mounted {
            None => HostPhase::Unmounted,
            Some(m) if m.component.has_pending() => HostPhase::UpdatePending,
            Some(_) => HostPhase::Idle,
        }
    }

    /// Resolve `path`, unmount the current page and mount the new one with
    /// its initial render.
    pub fn navigate(&mut self, path: &str) -> Result<&Node, RenderError> {
        let matched = self.routes.resolve(path)?;
        let component = matched.build()?;
        let route = matched.meta.clone();
        let params = matched.params.clone();

        self.unmount();

        let mut metrics = RenderMetrics::for_route(route.pattern.as_str());
        let start = Instant::now();
        let tree = component.render();
        metrics.record_pass(start.elapsed(), 0);

        tracing::info!(
            path,
            route = %route.pattern,
            component = component.name(),
            "page mounted"
        );

        let mounted = self.mounted.insert(Mounted {
            path: path.to_string(),
            route,
            params,
            component,
            tree,
            metrics,
        });
        Ok(&mounted.tree)
    }

    /// Route an event on the node at `target` to the action it is bound to.
    ///
    /// The action only requests state changes; they become visible after
    /// the next [`flush`](Self::flush).
    pub fn dispatch(&mut self, target: &[usize], event: EventKind) -> Result<(), RenderError> {
        let mounted = self.mounted.as_mut().ok_or(PetalError::NotMounted)?;

        let node = mounted
            .tree
            .at(target)
            .ok_or_else(|| PetalError::NodeNotFound(target.to_vec()))?;
        let action = node
            .as_element()
            .and_then(|el| el.action_for(event))
            .ok_or_else(|| PetalError::NoBinding {
                path: target.to_vec(),
                event: event.to_string(),
            })?
            .to_string();

        mounted.component.handle(&action)?;
        mounted.metrics.record_event();

        tracing::debug!(
            component = mounted.component.name(),
            %event,
            action = %action,
            pending = mounted.component.has_pending(),
            "event dispatched"
        );
        Ok(())
    }

    /// Shorthand for dispatching a click.
    pub fn click(&mut self, target: &[usize]) -> Result<(), RenderError> {
        self.dispatch(target, EventKind::Click)
    }

    /// Complete a render pass if updates are pending.
    ///
    /// Commits queued state, re-renders, and patches the displayed tree.
    /// Returns the applied patches; empty when nothing was pending.
    pub fn flush(&mut self) -> Result<Vec<Patch>, RenderError> {
        let mounted = self.mounted.as_mut().ok_or(PetalError::NotMounted)?;

        if !mounted.component.commit() {
            return Ok(Vec::new());
        }
        render_pass(mounted)
    }

    /// Re-render without committing state.
    ///
    /// With no state change this yields no patches.
    pub fn refresh(&mut self) -> Result<Vec<Patch>, RenderError> {
        let mounted = self.mounted.as_mut().ok_or(PetalError::NotMounted)?;
        render_pass(mounted)
    }

    /// Displayed tree of the mounted page.
    pub fn tree(&self) -> Option<&Node> {
        self.mounted.as_ref().map(|m| &m.tree)
    }

    /// Path the mounted page was navigated to.
    pub fn current_path(&self) -> Option<&str> {
        self.mounted.as_ref().map(|m| m.path.as_str())
    }

    pub fn current_route(&self) -> Option<&RouteMeta> {
        self.mounted.as_ref().map(|m| &m.route)
    }

    pub fn params(&self) -> Option<&RouteParams> {
        self.mounted.as_ref().map(|m| &m.params)
    }

    pub fn metrics(&self) -> Option<&RenderMetrics> {
        self.mounted.as_ref().map(|m| &m.metrics)
    }

    /// Head contributed by the mounted page.
    pub fn head(&self) -> Option<HeadContent> {
        self.mounted.as_ref().map(|m| m.component.head())
    }

    /// Full HTML document for the mounted page.
    pub fn render_document(&self) -> Result<String, RenderError> {
        let mounted = self.mounted.as_ref().ok_or(PetalError::NotMounted)?;
        Ok(self
            .document
            .render(&mounted.component.head(), &mounted.tree))
    }

    /// Destroy the mounted page, returning its metrics.
    pub fn unmount(&mut self) -> Option<RenderMetrics> {
        let mounted = self.mounted.take()?;
        tracing::info!(
            path = %mounted.path,
            component = mounted.component.name(),
            passes = mounted.metrics.passes,
            "page unmounted"
        );
        Some(mounted.metrics)
    }
}

fn render_pass(mounted: &mut Mounted) -> Result<Vec<Patch>, RenderError> {
    let start = Instant::now();
    let next = mounted.component.render();
    let patches = diff(&mounted.tree, &next);
    apply(&mut mounted.tree, &patches)?;
    mounted.metrics.record_pass(start.elapsed(), patches.len());

    debug_assert_eq!(mounted.tree, next);
    tracing::debug!(
        component = mounted.component.name(),
        patches = patches.len(),
        "render pass applied"
    );
    Ok(patches)
}

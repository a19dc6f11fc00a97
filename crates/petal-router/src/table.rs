//! Route table mapping path patterns to component factories.

use std::fmt;

use petal_core::{Component, PetalError};
use serde::Serialize;

use crate::pattern::{split_path, RouteParams, RoutePattern};

/// Builds a fresh component instance for a matched route.
pub type ComponentFactory = Box<dyn Fn(&RouteParams) -> Result<Box<dyn Component>, PetalError>>;

/// Descriptive information about a registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteMeta {
    /// Route pattern (e.g., "/product/:id").
    pub pattern: String,
    /// Component name.
    pub name: String,
}

struct RouteEntry {
    meta: RouteMeta,
    pattern: RoutePattern,
    factory: ComponentFactory,
}

/// A resolved route, ready to build its component.
pub struct RouteMatch<'a> {
    pub meta: &'a RouteMeta,
    pub params: RouteParams,
    /// Whether the fallback route was used.
    pub is_fallback: bool,
    factory: &'a ComponentFactory,
}

impl RouteMatch<'_> {
    /// Create the component for this match.
    pub fn build(&self) -> Result<Box<dyn Component>, PetalError> {
        (self.factory)(&self.params)
    }
}

impl fmt::Debug for RouteMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("meta", self.meta)
            .field("params", &self.params)
            .field("is_fallback", &self.is_fallback)
            .finish()
    }
}

/// Explicit route table owned by the render host.
#[derive(Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: Option<(RouteMeta, ComponentFactory)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route with a factory that receives the route params.
    pub fn register<F>(
        &mut self,
        pattern: &str,
        name: impl Into<String>,
        factory: F,
    ) -> Result<(), PetalError>
    where
        F: Fn(&RouteParams) -> Result<Box<dyn Component>, PetalError> + 'static,
    {
        let parsed = RoutePattern::parse(pattern)?;

        if self
            .entries
            .iter()
            .any(|e| e.pattern.overlaps_exactly(&parsed))
        {
            return Err(PetalError::DuplicateRoute(pattern.to_string()));
        }

        let name = name.into();
        tracing::debug!(pattern, name = %name, "route registered");

        self.entries.push(RouteEntry {
            meta: RouteMeta {
                pattern: pattern.to_string(),
                name,
            },
            pattern: parsed,
            factory: Box::new(factory),
        });
        Ok(())
    }

    /// Register a route whose component ignores params and cannot fail.
    pub fn register_page<C, F>(
        &mut self,
        pattern: &str,
        name: impl Into<String>,
        ctor: F,
    ) -> Result<(), PetalError>
    where
        C: Component + 'static,
        F: Fn() -> C + 'static,
    {
        self.register(pattern, name, move |_| Ok(Box::new(ctor()) as Box<dyn Component>))
    }

    /// Set the component used when nothing matches.
    pub fn set_fallback<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&RouteParams) -> Result<Box<dyn Component>, PetalError> + 'static,
    {
        let meta = RouteMeta {
            pattern: "*".to_string(),
            name: name.into(),
        };
        self.fallback = Some((meta, Box::new(factory)));
    }

    /// Resolve a request path.
    ///
    /// Among matching routes the one with the most literal segments wins;
    /// ties go to the earliest registration.
    pub fn resolve(&self, path: &str) -> Result<RouteMatch<'_>, PetalError> {
        let segments = split_path(path);

        let mut best: Option<(&RouteEntry, RouteParams)> = None;
        for entry in &self.entries {
            if let Some(params) = entry.pattern.matches(&segments) {
                let better = match &best {
                    Some((current, _)) => {
                        entry.pattern.static_segments() > current.pattern.static_segments()
                    }
                    None => true,
                };
                if better {
                    best = Some((entry, params));
                }
            }
        }

        if let Some((entry, params)) = best {
            tracing::debug!(path, route = %entry.meta.pattern, "route resolved");
            return Ok(RouteMatch {
                meta: &entry.meta,
                params,
                is_fallback: false,
                factory: &entry.factory,
            });
        }

        match &self.fallback {
            Some((meta, factory)) => {
                tracing::warn!(path, fallback = %meta.name, "no route matched");
                Ok(RouteMatch {
                    meta,
                    params: RouteParams::new(),
                    is_fallback: true,
                    factory,
                })
            }
            None => Err(PetalError::RouteNotFound(path.to_string())),
        }
    }

    /// Registered routes in registration order (fallback excluded).
    pub fn routes(&self) -> Vec<&RouteMeta> {
        self.entries.iter().map(|e| &e.meta).collect()
    }

    pub fn fallback(&self) -> Option<&RouteMeta> {
        self.fallback.as_ref().map(|(meta, _)| meta)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("routes", &self.routes())
            .field("fallback", &self.fallback())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use petal_core::{Element, Node};

    use super::*;

    struct Named(String);

    impl Component for Named {
        fn name(&self) -> &str {
            &self.0
        }

        fn render(&self) -> Node {
            Element::new("h1").child(self.0.as_str()).into()
        }
    }

    fn named(name: &'static str) -> impl Fn() -> Named {
        move || Named(name.to_string())
    }

    fn table() -> RouteTable {
        let mut routes = RouteTable::new();
        routes.register_page("/", "Home", named("Home")).unwrap();
        routes.register_page("/metadata", "Metadata", named("Metadata")).unwrap();
        routes
            .register("/product/:id", "Product", |params| {
                let id = params.get("id").cloned().unwrap_or_default();
                Ok(Box::new(Named(format!("Product {}", id))) as Box<dyn Component>)
            })
            .unwrap();
        routes.register_page("/product/new", "NewProduct", named("NewProduct")).unwrap();
        routes
    }

    // === Registration Tests ===

    #[test]
    fn test_register_and_list() {
        let routes = table();

        assert_eq!(routes.len(), 4);
        assert!(!routes.is_empty());
        let patterns: Vec<&str> = routes.routes().iter().map(|m| m.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["/", "/metadata", "/product/:id", "/product/new"]);
    }

    #[test]
    fn test_register_duplicate() {
        let mut routes = table();
        assert_eq!(
            routes.register_page("/metadata/", "Again", named("Again")),
            Err(PetalError::DuplicateRoute("/metadata/".to_string()))
        );
        assert!(routes.register_page("/product/:slug", "Slug", named("Slug")).is_err());
    }

    #[test]
    fn test_register_invalid_pattern() {
        let mut routes = RouteTable::new();
        assert!(routes.register_page("metadata", "Bad", named("Bad")).is_err());
        assert!(routes.is_empty());
    }

    // === Resolution Tests ===

    #[test]
    fn test_resolve_static() {
        let routes = table();
        let matched = routes.resolve("/metadata").unwrap();

        assert_eq!(matched.meta.name, "Metadata");
        assert!(!matched.is_fallback);
        assert_eq!(matched.build().unwrap().name(), "Metadata");
    }

    #[test]
    fn test_resolve_strips_query_and_slash() {
        let routes = table();
        assert_eq!(routes.resolve("/metadata/?x=1").unwrap().meta.name, "Metadata");
        assert_eq!(routes.resolve("").unwrap().meta.name, "Home");
    }

    #[test]
    fn test_resolve_params() {
        let routes = table();
        let matched = routes.resolve("/product/42").unwrap();

        assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));
        assert_eq!(matched.build().unwrap().name(), "Product 42");
    }

    #[test]
    fn test_static_beats_param() {
        let routes = table();
        assert_eq!(routes.resolve("/product/new").unwrap().meta.name, "NewProduct");
    }

    #[test]
    fn test_not_found_without_fallback() {
        let routes = table();
        assert_eq!(
            routes.resolve("/missing").unwrap_err(),
            PetalError::RouteNotFound("/missing".to_string())
        );
    }

    #[test]
    fn test_fallback() {
        let mut routes = table();
        routes.set_fallback("NotFound", |_| {
            Ok(Box::new(Named("NotFound".into())) as Box<dyn Component>)
        });

        let matched = routes.resolve("/missing").unwrap();
        assert!(matched.is_fallback);
        assert_eq!(matched.meta.name, "NotFound");
        assert_eq!(routes.fallback().map(|m| m.pattern.as_str()), Some("*"));
        assert_eq!(routes.len(), 4);
    }
}

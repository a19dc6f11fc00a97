//! Error types for Petal.

use thiserror::Error;

/// Errors that can occur while routing, mounting or driving a page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PetalError {
    /// No route matches the requested path.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// A route with the same pattern is already registered.
    #[error("Duplicate route: {0}")]
    DuplicateRoute(String),

    /// Route pattern could not be parsed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An operation needed a mounted page but none is mounted.
    #[error("No page mounted")]
    NotMounted,

    /// Event target path does not exist in the displayed tree.
    #[error("No node at path {0:?}")]
    NodeNotFound(Vec<usize>),

    /// Event target exists but has no binding for the event.
    #[error("Node at path {path:?} has no '{event}' binding")]
    NoBinding { path: Vec<usize>, event: String },

    /// Component does not expose the requested action.
    #[error("Unknown action '{action}' for component {component}")]
    UnknownAction { component: String, action: String },

    /// Event name could not be parsed.
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    /// Image built-in was given unusable properties.
    #[error("Invalid image '{src}': {reason}")]
    InvalidImage { src: String, reason: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

//! Error types for the render host.

use petal_core::{NodePath, PetalError};
use thiserror::Error;

/// A patch that does not fit the tree it is applied to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("Patch target {0:?} not found")]
    TargetNotFound(NodePath),

    #[error("Patch '{op}' does not apply to the node at {path:?}")]
    KindMismatch { path: NodePath, op: &'static str },

    #[error("Child index {index} out of bounds at {path:?}")]
    IndexOutOfBounds { path: NodePath, index: usize },
}

/// Errors returned by the render host.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Petal(#[from] PetalError),

    #[error("Patch failed: {0}")]
    Patch(#[from] PatchError),
}

//! Render host for Petal pages.
//!
//! This crate owns the update loop around a mounted component:
//! - `RenderHost` - route resolution, mounting, event dispatch, flushes
//! - `diff` / `apply` - minimal patches between two view trees
//! - `HostPhase` - idle / update-pending tracking
//!
//! A flush commits queued component state, re-renders, diffs the new tree
//! against the displayed one and applies the patches. Updates are therefore
//! applied in request order and never in place.

mod diff;
mod error;
mod host;

pub use diff::*;
pub use error::*;
pub use host::*;

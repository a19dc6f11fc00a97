//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use petal_router::prelude::*;
//! ```

pub use crate::{ComponentFactory, RouteMatch, RouteMeta, RouteParams, RoutePattern, RouteTable};

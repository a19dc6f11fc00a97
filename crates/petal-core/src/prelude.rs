//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use petal_core::prelude::*;
//! ```

pub use crate::{
    AppConfig, Component, Counter, Element, EventKind, HeadContent, Image, Link, Node, NodePath,
    PetalError, StateCell,
};

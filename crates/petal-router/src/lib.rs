//! Explicit routing for Petal pages.
//!
//! Routes are registered in a [`RouteTable`] owned by the render host,
//! mapping a path pattern to a component factory:
//!
//! ```text
//! /               -> HomePage
//! /metadata       -> MetadataPage
//! /product/:id    -> ProductPage   (params: id)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use petal_core::prelude::*;
//! use petal_router::prelude::*;
//!
//! struct About;
//!
//! impl Component for About {
//!     fn name(&self) -> &str {
//!         "About"
//!     }
//!
//!     fn render(&self) -> Node {
//!         Element::new("h1").child("About").into()
//!     }
//! }
//!
//! let mut routes = RouteTable::new();
//! routes.register_page("/about", "About", || About).unwrap();
//!
//! let matched = routes.resolve("/about?ref=nav").unwrap();
//! assert_eq!(matched.meta.name, "About");
//! ```

pub mod prelude;
mod pattern;
mod table;

pub use pattern::*;
pub use table::*;

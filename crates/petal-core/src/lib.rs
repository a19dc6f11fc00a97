//! Petal Core
//!
//! The view model shared by every Petal page and by the render host.
//!
//! # Architecture
//!
//! - `Node` / `Element` - a plain, comparable view tree
//! - `StateCell` / `Counter` - explicit state containers with queued updates
//! - `Component` - render function plus named actions
//! - `Link` / `Image` / `HeadContent` - framework built-ins used by pages
//!
//! # Quick Start
//!
//! ```rust
//! use petal_core::prelude::*;
//!
//! struct Hello;
//!
//! impl Component for Hello {
//!     fn name(&self) -> &str {
//!         "Hello"
//!     }
//!
//!     fn render(&self) -> Node {
//!         Element::new("h1").child("Hello").into()
//!     }
//! }
//!
//! assert_eq!(Hello.render().to_html(), "<h1>Hello</h1>");
//! ```

pub mod prelude;
mod builtins;
mod component;
mod config;
mod error;
mod head;
mod html;
mod state;
mod view;

pub use builtins::*;
pub use component::*;
pub use config::*;
pub use error::*;
pub use head::*;
pub use html::*;
pub use state::*;
pub use view::*;

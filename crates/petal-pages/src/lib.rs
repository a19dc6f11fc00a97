//! The Petal site.
//!
//! Pages:
//! - `/` - [`HomePage`]: header, list and a like counter
//! - `/metadata` - [`MetadataPage`]: sets the document title
//! - `/imageExample` - [`ImageExample`]: sized image built-in
//!
//! Anything else renders [`NotFoundPage`].
//!
//! ```rust
//! use petal_core::AppConfig;
//!
//! let mut host = petal_pages::host(&AppConfig::default())?;
//! host.navigate("/")?;
//! host.click(petal_pages::LIKE_BUTTON)?;
//! host.flush()?;
//!
//! assert_eq!(host.tree().unwrap().texts_of("button"), vec!["1"]);
//! # Ok::<(), petal_render::RenderError>(())
//! ```

mod document;
mod header;
mod home;
mod image;
mod metadata;
mod not_found;

pub use document::*;
pub use header::*;
pub use home::*;
pub use image::*;
pub use metadata::*;
pub use not_found::*;

use petal_core::{AppConfig, Component, PetalError};
use petal_render::RenderHost;
use petal_router::RouteTable;

/// Route table of the site.
pub fn routes() -> Result<RouteTable, PetalError> {
    let mut table = RouteTable::new();

    table.register_page("/", "Home", HomePage::new)?;
    table.register_page("/metadata", "Metadata", || MetadataPage)?;
    table.register("/imageExample", "ImageExample", |_| {
        Ok(Box::new(ImageExample::new()?) as Box<dyn Component>)
    })?;
    table.set_fallback("NotFound", |_| Ok(Box::new(NotFoundPage) as Box<dyn Component>));

    Ok(table)
}

/// Render host serving the site.
pub fn host(config: &AppConfig) -> Result<RenderHost, PetalError> {
    Ok(RenderHost::new(routes()?, site_document(config)))
}

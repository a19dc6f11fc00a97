//! Document shell for Petal pages.
//!
//! A [`Document`] is the HTML skeleton every page is rendered into:
//! doctype, `<html lang>`, the merged head, and the body wrapper that
//! hosts the page's view tree.

mod document;

pub use document::*;

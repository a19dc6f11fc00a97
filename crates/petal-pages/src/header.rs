//! Page header.

use petal_core::{Element, Node};

/// Title shown when the header is given none.
pub const DEFAULT_TITLE: &str = "Default Title";

/// A single `<h1>` with a caller-supplied title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub title: Option<String>,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Title to display, falling back to [`DEFAULT_TITLE`] when absent or empty.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => DEFAULT_TITLE,
        }
    }

    pub fn render(&self) -> Node {
        Element::new("h1").child(self.display_title()).into()
    }
}

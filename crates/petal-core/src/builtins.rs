//! Framework built-in components: links and images.

use crate::{Element, Node, PetalError};

/// Client-side navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    pub fn render(&self) -> Node {
        Element::new("a")
            .attr("href", self.href.as_str())
            .child(self.label.as_str())
            .into()
    }
}

/// Sized image with lazy loading by default.
///
/// Width and height are the rendered size in CSS pixels and must both be
/// non-zero so the browser can reserve space before the image loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub src: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    pub priority: bool,
}

impl Image {
    pub fn new(
        src: impl Into<String>,
        width: u32,
        height: u32,
        alt: impl Into<String>,
    ) -> Result<Self, PetalError> {
        let src = src.into();

        if src.trim().is_empty() {
            return Err(PetalError::InvalidImage {
                src,
                reason: "src is empty".to_string(),
            });
        }
        if width == 0 || height == 0 {
            return Err(PetalError::InvalidImage {
                src,
                reason: format!("size must be non-zero, got {}x{}", width, height),
            });
        }

        Ok(Self {
            src,
            width,
            height,
            alt: alt.into(),
            priority: false,
        })
    }

    /// Load eagerly (above-the-fold images).
    pub fn with_priority(mut self) -> Self {
        self.priority = true;
        self
    }

    pub fn render(&self) -> Node {
        let el = Element::new("img")
            .attr("src", self.src.as_str())
            .attr("width", self.width.to_string())
            .attr("height", self.height.to_string())
            .attr("alt", self.alt.as_str())
            .attr("decoding", "async");

        let el = if self.priority {
            el.attr("loading", "eager").attr("fetchpriority", "high")
        } else {
            el.attr("loading", "lazy")
        };

        el.into()
    }
}

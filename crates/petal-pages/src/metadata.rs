//! Page that sets its own document title.

use petal_core::{Component, Element, HeadContent, Link, Node};

pub const METADATA_TITLE: &str = "Sample Title";

pub struct MetadataPage;

impl Component for MetadataPage {
    fn name(&self) -> &str {
        "Metadata"
    }

    fn render(&self) -> Node {
        Node::fragment([
            Link::new("/", "back").render(),
            Element::new("h1").child("See Title in Tab").into(),
        ])
    }

    fn head(&self) -> HeadContent {
        HeadContent::new(METADATA_TITLE)
    }
}

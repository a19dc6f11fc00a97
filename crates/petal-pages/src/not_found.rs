//! Fallback page for unmatched paths.

use petal_core::{Component, Element, HeadContent, Link, Node};

pub struct NotFoundPage;

impl Component for NotFoundPage {
    fn name(&self) -> &str {
        "NotFound"
    }

    fn render(&self) -> Node {
        Element::new("div")
            .child(Element::new("h1").child("404"))
            .child(Element::new("p").child("This page could not be found."))
            .child(Link::new("/", "home").render())
            .into()
    }

    fn head(&self) -> HeadContent {
        HeadContent::new("404: Not Found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_render() {
        let tree = NotFoundPage.render();
        assert_eq!(tree.texts_of("h1"), vec!["404"]);
        assert_eq!(tree.texts_of("a"), vec!["home"]);
    }
}

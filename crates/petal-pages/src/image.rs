//! Image built-in example.

use petal_core::{Component, Image, Node, PetalError};

pub struct ImageExample {
    image: Image,
}

impl ImageExample {
    pub fn new() -> Result<Self, PetalError> {
        Ok(Self {
            image: Image::new("/tree.png", 144, 144, "Your Name")?,
        })
    }
}

impl Component for ImageExample {
    fn name(&self) -> &str {
        "ImageExample"
    }

    fn render(&self) -> Node {
        Node::fragment([self.image.render()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_example_render() {
        let html = ImageExample::new().unwrap().render().to_html();

        assert!(html.starts_with("<img "));
        assert!(html.contains(r#"src="/tree.png""#));
        assert!(html.contains(r#"width="144""#));
        assert!(html.contains(r#"height="144""#));
        assert!(html.contains(r#"alt="Your Name""#));
        assert!(!html.contains("</img>"));
    }
}

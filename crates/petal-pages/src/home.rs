//! Home page: header, a fixed list and a like counter.

use petal_core::{Component, Counter, Element, EventKind, Node, PetalError};

use crate::header::Header;

pub const HOME_TITLE: &str = "Hello World";
pub const HOME_ITEMS: [&str; 2] = ["foo", "bar"];

/// Path of the like button inside the home tree.
pub const LIKE_BUTTON: &[usize] = &[2];

pub struct HomePage {
    header: Header,
    items: Vec<String>,
    likes: Counter,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            header: Header::new(HOME_TITLE),
            items: HOME_ITEMS.iter().map(|s| s.to_string()).collect(),
            likes: Counter::new(),
        }
    }

    /// Committed like count.
    pub fn likes(&self) -> u64 {
        self.likes.get()
    }

    /// Request one more like. Visible after the next commit.
    pub fn increment(&self) {
        self.likes.increment();
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomePage {
    fn name(&self) -> &str {
        "Home"
    }

    fn render(&self) -> Node {
        let list = Element::new("ul").children(
            self.items
                .iter()
                .map(|item| Element::new("li").key(item.as_str()).child(item.as_str())),
        );

        Element::new("div")
            .child(self.header.render())
            .child(list)
            .child(
                Element::new("button")
                    .on(EventKind::Click, "increment")
                    .child(self.likes.get().to_string()),
            )
            .into()
    }

    fn handle(&mut self, action: &str) -> Result<(), PetalError> {
        match action {
            "increment" => {
                self.increment();
                Ok(())
            }
            _ => Err(PetalError::UnknownAction {
                component: self.name().to_string(),
                action: action.to_string(),
            }),
        }
    }

    fn has_pending(&self) -> bool {
        self.likes.has_pending()
    }

    fn commit(&mut self) -> bool {
        self.likes.commit()
    }
}

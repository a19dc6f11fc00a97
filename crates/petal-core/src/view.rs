//! View tree produced by component render functions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::PetalError;

/// Path from the root to a node, as child indices.
pub type NodePath = Vec<usize>;

/// Interaction events an element can bind to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Input,
    Submit,
}

impl EventKind {
    /// Lowercase event name, as used in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Submit => "submit",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = PetalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "click" => Ok(Self::Click),
            "input" => Ok(Self::Input),
            "submit" => Ok(Self::Submit),
            other => Err(PetalError::UnknownEvent(other.to_string())),
        }
    }
}

/// An element node.
///
/// Event bindings name an action on the owning component instead of holding
/// a closure, so two renders of the same state compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name (e.g., "h1", "button").
    pub tag: String,
    /// Reconciliation key among siblings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Attributes, kept sorted for stable output.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Event bindings (event -> action name).
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub events: BTreeMap<EventKind, String>,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            key: None,
            attrs: BTreeMap::new(),
            events: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set the reconciliation key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Bind an event to a named component action.
    pub fn on(mut self, event: EventKind, action: impl Into<String>) -> Self {
        self.events.insert(event, action.into());
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Action bound to an event, if any.
    pub fn action_for(&self, event: EventKind) -> Option<&str> {
        self.events.get(&event).map(|s| s.as_str())
    }
}

/// A node in the view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Text(String),
    /// Children rendered without a wrapping element.
    Fragment(Vec<Node>),
}

impl Node {
    /// Create a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a fragment.
    pub fn fragment<I, N>(children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        Self::Fragment(children.into_iter().map(Into::into).collect())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Reconciliation key, for keyed elements.
    pub fn key(&self) -> Option<&str> {
        self.as_element().and_then(|el| el.key.as_deref())
    }

    /// Child nodes (empty for text).
    pub fn child_nodes(&self) -> &[Node] {
        match self {
            Self::Element(el) => &el.children,
            Self::Fragment(children) => children,
            Self::Text(_) => &[],
        }
    }

    /// Mutable child list, if this node can have children.
    pub fn child_nodes_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Self::Element(el) => Some(&mut el.children),
            Self::Fragment(children) => Some(children),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            _ => {
                for child in self.child_nodes() {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Node at `path`, if it exists.
    pub fn at(&self, path: &[usize]) -> Option<&Node> {
        let mut node = self;
        for &index in path {
            node = node.child_nodes().get(index)?;
        }
        Some(node)
    }

    /// Mutable node at `path`, if it exists.
    pub fn at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let mut node = self;
        for &index in path {
            node = node.child_nodes_mut()?.get_mut(index)?;
        }
        Some(node)
    }

    /// Path of the first element (pre-order) matching `pred`.
    pub fn find(&self, pred: impl Fn(&Element) -> bool) -> Option<NodePath> {
        self.find_all(pred).into_iter().next()
    }

    /// Paths of every element (pre-order) matching `pred`.
    pub fn find_all(&self, pred: impl Fn(&Element) -> bool) -> Vec<NodePath> {
        let mut found = Vec::new();
        let mut path = Vec::new();
        self.walk(&pred, &mut path, &mut found);
        found
    }

    fn walk(
        &self,
        pred: &dyn Fn(&Element) -> bool,
        path: &mut NodePath,
        found: &mut Vec<NodePath>,
    ) {
        if let Self::Element(el) = self {
            if pred(el) {
                found.push(path.clone());
            }
        }
        for (index, child) in self.child_nodes().iter().enumerate() {
            path.push(index);
            child.walk(pred, path, found);
            path.pop();
        }
    }

    /// Text of every element with the given tag, in document order.
    pub fn texts_of(&self, tag: &str) -> Vec<String> {
        self.find_all(|el| el.tag == tag)
            .iter()
            .filter_map(|path| self.at(path))
            .map(Node::text_content)
            .collect()
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

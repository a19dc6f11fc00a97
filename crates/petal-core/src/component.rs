//! Component interface between pages and the render host.

use crate::{HeadContent, Node, PetalError};

/// A unit exposing a render function over its current state.
///
/// `render` must be pure with respect to committed state: calling it twice
/// without an intervening commit yields equal trees. State changes are only
/// requested from `handle`; the host calls `commit` before the next render.
pub trait Component {
    /// Component name, used in logs and errors.
    fn name(&self) -> &str;

    /// Produce the view tree for the committed state.
    fn render(&self) -> Node;

    /// Head content this component contributes to the document.
    fn head(&self) -> HeadContent {
        HeadContent::default()
    }

    /// Run a named action bound to an event in the rendered tree.
    fn handle(&mut self, action: &str) -> Result<(), PetalError> {
        Err(PetalError::UnknownAction {
            component: self.name().to_string(),
            action: action.to_string(),
        })
    }

    /// Whether state updates are queued.
    fn has_pending(&self) -> bool {
        false
    }

    /// Apply queued state updates. Returns `true` if state changed.
    fn commit(&mut self) -> bool {
        false
    }
}

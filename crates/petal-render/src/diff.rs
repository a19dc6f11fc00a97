//! Tree diffing and patch application.
//!
//! Patches are meant to be applied in order: each patch's path refers to
//! the tree as left by the patches before it.

use std::collections::HashSet;

use petal_core::{Element, EventKind, Node, NodePath};
use serde::Serialize;

use crate::PatchError;

/// One edit to a displayed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Patch {
    /// Node the edit applies to.
    pub path: NodePath,
    #[serde(flatten)]
    pub op: PatchOp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PatchOp {
    /// Replace the node entirely.
    Replace { node: Node },
    /// Change a text node.
    SetText { text: String },
    SetAttr { name: String, value: String },
    RemoveAttr { name: String },
    SetEvent { event: EventKind, action: String },
    RemoveEvent { event: EventKind },
    /// Insert a child at `index`.
    Insert { index: usize, node: Node },
    /// Remove the child at `index`.
    Remove { index: usize },
    /// Move a child from `from` to `to` (remove, then insert).
    Move { from: usize, to: usize },
}

impl PatchOp {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Replace { .. } => "replace",
            Self::SetText { .. } => "set_text",
            Self::SetAttr { .. } => "set_attr",
            Self::RemoveAttr { .. } => "remove_attr",
            Self::SetEvent { .. } => "set_event",
            Self::RemoveEvent { .. } => "remove_event",
            Self::Insert { .. } => "insert",
            Self::Remove { .. } => "remove",
            Self::Move { .. } => "move",
        }
    }
}

/// Compute the patches turning `old` into `new`.
///
/// Equal trees produce no patches. Elements are patched in place when tag
/// and key match; otherwise the node is replaced. Children whose keys are
/// all present and unique on both sides are reconciled by key, anything
/// else positionally.
pub fn diff(old: &Node, new: &Node) -> Vec<Patch> {
    let mut patches = Vec::new();
    let mut path = Vec::new();
    diff_node(old, new, &mut path, &mut patches);
    patches
}

fn push(patches: &mut Vec<Patch>, path: &NodePath, op: PatchOp) {
    patches.push(Patch {
        path: path.clone(),
        op,
    });
}

fn diff_node(old: &Node, new: &Node, path: &mut NodePath, patches: &mut Vec<Patch>) {
    if old == new {
        return;
    }

    match (old, new) {
        (Node::Text(_), Node::Text(text)) => {
            push(patches, path, PatchOp::SetText { text: text.clone() });
        }
        (Node::Element(a), Node::Element(b)) if a.tag == b.tag && a.key == b.key => {
            diff_attrs(a, b, path, patches);
            diff_events(a, b, path, patches);
            diff_children(&a.children, &b.children, path, patches);
        }
        (Node::Fragment(a), Node::Fragment(b)) => {
            diff_children(a, b, path, patches);
        }
        _ => push(patches, path, PatchOp::Replace { node: new.clone() }),
    }
}

fn diff_attrs(a: &Element, b: &Element, path: &NodePath, patches: &mut Vec<Patch>) {
    for (name, value) in &b.attrs {
        if a.attrs.get(name) != Some(value) {
            push(
                patches,
                path,
                PatchOp::SetAttr {
                    name: name.clone(),
                    value: value.clone(),
                },
            );
        }
    }
    for name in a.attrs.keys() {
        if !b.attrs.contains_key(name) {
            push(patches, path, PatchOp::RemoveAttr { name: name.clone() });
        }
    }
}

fn diff_events(a: &Element, b: &Element, path: &NodePath, patches: &mut Vec<Patch>) {
    for (event, action) in &b.events {
        if a.events.get(event) != Some(action) {
            push(
                patches,
                path,
                PatchOp::SetEvent {
                    event: *event,
                    action: action.clone(),
                },
            );
        }
    }
    for event in a.events.keys() {
        if !b.events.contains_key(event) {
            push(patches, path, PatchOp::RemoveEvent { event: *event });
        }
    }
}

/// Whether every child has a key and keys are unique.
fn fully_keyed(children: &[Node]) -> bool {
    let mut seen = HashSet::new();
    children
        .iter()
        .all(|child| child.key().is_some_and(|key| seen.insert(key)))
}

fn diff_children(old: &[Node], new: &[Node], path: &mut NodePath, patches: &mut Vec<Patch>) {
    if !old.is_empty() && !new.is_empty() && fully_keyed(old) && fully_keyed(new) {
        diff_keyed(old, new, path, patches);
    } else {
        diff_positional(old, new, path, patches);
    }
}

fn diff_positional(old: &[Node], new: &[Node], path: &mut NodePath, patches: &mut Vec<Patch>) {
    let common = old.len().min(new.len());

    for index in 0..common {
        path.push(index);
        diff_node(&old[index], &new[index], path, patches);
        path.pop();
    }
    for (index, node) in new.iter().enumerate().skip(common) {
        push(
            patches,
            path,
            PatchOp::Insert {
                index,
                node: node.clone(),
            },
        );
    }
    for index in (new.len()..old.len()).rev() {
        push(patches, path, PatchOp::Remove { index });
    }
}

fn diff_keyed(old: &[Node], new: &[Node], path: &mut NodePath, patches: &mut Vec<Patch>) {
    let new_keys: HashSet<&str> = new.iter().filter_map(Node::key).collect();

    // Working copy of the displayed children as (key, node) pairs.
    let mut current: Vec<(&str, &Node)> = old
        .iter()
        .filter_map(|node| node.key().map(|key| (key, node)))
        .collect();

    for index in (0..current.len()).rev() {
        if !new_keys.contains(current[index].0) {
            push(patches, path, PatchOp::Remove { index });
            current.remove(index);
        }
    }

    for (index, node) in new.iter().enumerate() {
        let Some(key) = node.key() else { continue };

        if current.get(index).map(|(k, _)| *k) == Some(key) {
            // Already in place.
        } else if let Some(from) = current.iter().position(|(k, _)| *k == key) {
            push(patches, path, PatchOp::Move { from, to: index });
            let item = current.remove(from);
            current.insert(index, item);
        } else {
            push(
                patches,
                path,
                PatchOp::Insert {
                    index,
                    node: node.clone(),
                },
            );
            current.insert(index, (key, node));
            continue;
        }

        path.push(index);
        diff_node(current[index].1, node, path, patches);
        path.pop();
    }
}

/// Apply patches, in order, to a displayed tree.
pub fn apply(root: &mut Node, patches: &[Patch]) -> Result<(), PatchError> {
    for patch in patches {
        apply_one(root, patch)?;
    }
    Ok(())
}

fn apply_one(root: &mut Node, patch: &Patch) -> Result<(), PatchError> {
    let path = &patch.path;
    let target = root
        .at_mut(path)
        .ok_or_else(|| PatchError::TargetNotFound(path.clone()))?;

    let mismatch = || PatchError::KindMismatch {
        path: path.clone(),
        op: patch.op.name(),
    };
    let out_of_bounds = |index: usize| PatchError::IndexOutOfBounds {
        path: path.clone(),
        index,
    };

    match &patch.op {
        PatchOp::Replace { node } => *target = node.clone(),
        PatchOp::SetText { text } => match target {
            Node::Text(current) => *current = text.clone(),
            _ => return Err(mismatch()),
        },
        PatchOp::SetAttr { name, value } => {
            let el = element_mut(target).ok_or_else(mismatch)?;
            el.attrs.insert(name.clone(), value.clone());
        }
        PatchOp::RemoveAttr { name } => {
            element_mut(target).ok_or_else(mismatch)?.attrs.remove(name);
        }
        PatchOp::SetEvent { event, action } => {
            let el = element_mut(target).ok_or_else(mismatch)?;
            el.events.insert(*event, action.clone());
        }
        PatchOp::RemoveEvent { event } => {
            element_mut(target).ok_or_else(mismatch)?.events.remove(event);
        }
        PatchOp::Insert { index, node } => {
            let children = target.child_nodes_mut().ok_or_else(mismatch)?;
            if *index > children.len() {
                return Err(out_of_bounds(*index));
            }
            children.insert(*index, node.clone());
        }
        PatchOp::Remove { index } => {
            let children = target.child_nodes_mut().ok_or_else(mismatch)?;
            if *index >= children.len() {
                return Err(out_of_bounds(*index));
            }
            children.remove(*index);
        }
        PatchOp::Move { from, to } => {
            let children = target.child_nodes_mut().ok_or_else(mismatch)?;
            if *from >= children.len() {
                return Err(out_of_bounds(*from));
            }
            if *to >= children.len() {
                return Err(out_of_bounds(*to));
            }
            let node = children.remove(*from);
            children.insert(*to, node);
        }
    }

    Ok(())
}

fn element_mut(node: &mut Node) -> Option<&mut Element> {
    match node {
        Node::Element(el) => Some(el),
        _ => None,
    }
}

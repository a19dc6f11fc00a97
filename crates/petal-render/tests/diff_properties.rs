//! Property tests for tree diffing.
//!
//! 1. `diff(x, x)` is empty.
//! 2. Applying `diff(a, b)` to `a` yields `b`.
//! 3. Diff is deterministic.
//! 4. Keyed lists reconcile without replacing the list.

use petal_core::{Element, EventKind, Node};
use petal_render::{apply, diff, PatchOp};
use proptest::prelude::*;

const TAGS: &[&str] = &["div", "p", "span", "li"];
const KEYS: &[&str] = &["a", "b", "c", "d", "e", "f"];
const ATTRS: &[&str] = &["class", "id", "href"];
const ACTIONS: &[&str] = &["increment", "reset"];

// ── Strategies ──────────────────────────────────────────────────────────

fn text() -> impl Strategy<Value = Node> {
    "[xyz]{0,2}".prop_map(|s| Node::text(s))
}

fn element(children: impl Strategy<Value = Vec<Node>>) -> impl Strategy<Value = Node> {
    (
        proptest::sample::select(TAGS),
        proptest::collection::btree_map(
            proptest::sample::select(ATTRS),
            "[ab]{1}",
            0..3,
        ),
        proptest::option::of(proptest::sample::select(ACTIONS)),
        children,
    )
        .prop_map(|(tag, attrs, action, children)| {
            let mut el = Element::new(tag);
            for (name, value) in attrs {
                el = el.attr(name, value);
            }
            if let Some(action) = action {
                el = el.on(EventKind::Click, action);
            }
            Node::from(el.children(children))
        })
}

/// `<ul>` of `<li>` whose keys are a shuffled subset of [`KEYS`].
fn keyed_list(item: BoxedStrategy<Node>) -> impl Strategy<Value = Node> {
    proptest::sample::subsequence(KEYS.to_vec(), 0..=KEYS.len())
        .prop_shuffle()
        .prop_flat_map(move |keys| {
            let len = keys.len();
            (Just(keys), proptest::collection::vec(item.clone(), len))
        })
        .prop_map(|(keys, items)| {
            Node::from(
                Element::new("ul").children(
                    keys.into_iter()
                        .zip(items)
                        .map(|(key, item)| Element::new("li").key(key).child(item)),
                ),
            )
        })
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![text(), element(Just(Vec::new()))];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            element(proptest::collection::vec(inner.clone(), 0..4)),
            keyed_list(inner.clone()),
            proptest::collection::vec(inner, 0..4).prop_map(|children| Node::fragment(children)),
        ]
    })
}

fn list_of_nodes() -> impl Strategy<Value = Node> {
    keyed_list(node().boxed())
}

fn assert_round_trip(old: &Node, new: &Node) -> Result<(), TestCaseError> {
    let patches = diff(old, new);
    let mut patched = old.clone();
    let applied = apply(&mut patched, &patches);

    prop_assert!(applied.is_ok(), "apply failed: {:?} for {:?}", applied, patches);
    prop_assert_eq!(&patched, new, "patches: {:?}", patches);
    Ok(())
}

// ── 1. Identical trees produce zero patches ─────────────────────────────

proptest! {
    #[test]
    fn identical_trees_produce_empty_diff(tree in node()) {
        let patches = diff(&tree, &tree.clone());
        prop_assert!(patches.is_empty(), "expected no patches, got {:?}", patches);
    }
}

// ── 2. Round trip ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn apply_diff_yields_new_tree(old in node(), new in node()) {
        assert_round_trip(&old, &new)?;
    }

    #[test]
    fn keyed_lists_round_trip(old in list_of_nodes(), new in list_of_nodes()) {
        assert_round_trip(&old, &new)?;
    }

    #[test]
    fn patched_tree_then_diffs_empty(old in node(), new in node()) {
        let mut patched = old.clone();
        apply(&mut patched, &diff(&old, &new)).unwrap();
        prop_assert!(diff(&patched, &new).is_empty());
    }
}

// ── 3. Determinism ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn diff_is_deterministic(old in node(), new in node()) {
        prop_assert_eq!(diff(&old, &new), diff(&old, &new));
    }
}

// ── 4. Keyed lists are never replaced wholesale ─────────────────────────

proptest! {
    #[test]
    fn keyed_lists_patch_children_only(old in list_of_nodes(), new in list_of_nodes()) {
        let patches = diff(&old, &new);
        let root_replaced = patches
            .iter()
            .any(|p| p.path.is_empty() && matches!(p.op, PatchOp::Replace { .. }));
        prop_assert!(!root_replaced, "list root replaced: {:?}", patches);
    }
}

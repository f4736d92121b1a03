//! Tree reconciliation over the in-memory document.

use weft::{Document, NodeId, VNode, materialize, props, reconcile, reconcile_at};
use weft_dom::{MemoryDom, Mutation};

/// Structural mutations recorded directly on `parent`, ignoring the ones
/// materialization performs inside fresh subtrees.
fn structural_on(mutations: &[Mutation], parent: NodeId) -> Vec<Mutation> {
    mutations
        .iter()
        .filter(|mutation| match mutation {
            Mutation::AppendChild { parent: at, .. }
            | Mutation::InsertChild { parent: at, .. }
            | Mutation::ReplaceChild { parent: at, .. }
            | Mutation::RemoveChild { parent: at, .. }
            | Mutation::MoveChild { parent: at, .. } => *at == parent,
            _ => false,
        })
        .cloned()
        .collect()
}

fn sample_tree() -> VNode {
    VNode::element(
        "section",
        props! { "className" => "panel", "title" => "sample" },
        vec![
            VNode::element("h1", None, vec!["heading".into()]),
            VNode::element(
                "p",
                props! { "className" => "body" },
                vec!["some ".into(), VNode::element("em", None, vec!["text".into()])],
            ),
        ],
    )
}

#[test]
fn test_initial_render_matches_direct_materialization() {
    let tree = sample_tree();

    let mut direct = MemoryDom::new();
    let direct_root = direct.root();
    let node = materialize(&mut direct, &tree).unwrap();
    direct.append_child(direct_root, node).unwrap();

    let mut reconciled = MemoryDom::new();
    let root = reconciled.root();
    reconcile(&mut reconciled, root, Some(&tree), None).unwrap();

    assert_eq!(reconciled.to_html(root), direct.to_html(direct_root));
    assert_eq!(reconciled.child_count(root), 1);
}

#[test]
fn test_reconciling_identical_trees_performs_no_mutations() {
    let tree = sample_tree();
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&tree), None).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&tree), Some(&tree)).unwrap();
    assert!(doc.mutations().is_empty());
}

#[test]
fn test_text_change_replaces_text_node() {
    let first = VNode::element("div", None, vec!["hello".into()]);
    let second = VNode::element("div", None, vec!["world".into()]);
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    assert_eq!(doc.to_html(root), "<div>world</div>");

    let container = doc.child_at(root, 0).unwrap();
    let ops = structural_on(doc.mutations(), container);
    assert!(matches!(
        ops.as_slice(),
        [Mutation::ReplaceChild { index: 0, .. }]
    ));
}

#[test]
fn test_tag_change_replaces_whole_subtree() {
    let first = VNode::element("div", props! { "title" => "only-on-div" }, vec!["x".into()]);
    let second = VNode::element("span", None, vec!["x".into()]);
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    let old_node = doc.child_at(root, 0).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    // Fresh materialization, not a merge: no attribute survives.
    assert_eq!(doc.to_html(root), "<span>x</span>");
    assert!(!doc.contains(old_node));

    let ops = structural_on(doc.mutations(), root);
    assert!(matches!(
        ops.as_slice(),
        [Mutation::ReplaceChild { index: 0, .. }]
    ));
}

#[test]
fn test_attribute_update_patches_in_place() {
    let first = VNode::element("div", props! { "title" => "a" }, vec!["x".into()]);
    let second = VNode::element("div", props! { "title" => "b" }, vec!["x".into()]);
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    let node = doc.child_at(root, 0).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    assert_eq!(doc.attr(node, "title"), Some("b"));
    // Same live node, one attribute write, nothing structural anywhere.
    assert_eq!(doc.child_at(root, 0), Some(node));
    assert_eq!(
        doc.mutations(),
        &[Mutation::SetAttr {
            node,
            name: "title".to_string(),
            value: "b".to_string()
        }]
    );
}

#[test]
fn test_full_removal_leaves_lower_siblings_untouched() {
    let mut doc = MemoryDom::new();
    let root = doc.root();
    let keep = VNode::element("header", None, vec!["keep".into()]);
    reconcile_at(&mut doc, root, Some(&keep), None, 0).unwrap();

    let tree = sample_tree();
    reconcile_at(&mut doc, root, Some(&tree), None, 1).unwrap();
    assert_eq!(doc.child_count(root), 2);

    reconcile_at(&mut doc, root, None, Some(&tree), 1).unwrap();
    assert_eq!(doc.child_count(root), 1);
    assert_eq!(doc.to_html(root), "<header>keep</header>");
}

#[test]
fn test_child_growth_appends_at_end() {
    let first = VNode::element("ul", None, vec![VNode::element("li", None, vec!["a".into()])]);
    let second = VNode::element(
        "ul",
        None,
        vec![
            VNode::element("li", None, vec!["a".into()]),
            VNode::element("li", None, vec!["b".into()]),
        ],
    );
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    let list = doc.child_at(root, 0).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    assert_eq!(doc.to_html(root), "<ul><li>a</li><li>b</li></ul>");

    let ops = structural_on(doc.mutations(), list);
    assert!(matches!(ops.as_slice(), [Mutation::AppendChild { .. }]));
}

#[test]
fn test_child_shrink_removes_trailing_positions() {
    let first = VNode::element(
        "ul",
        None,
        vec![
            VNode::element("li", None, vec!["a".into()]),
            VNode::element("li", None, vec!["b".into()]),
            VNode::element("li", None, vec!["c".into()]),
        ],
    );
    let second = VNode::element("ul", None, vec![VNode::element("li", None, vec!["a".into()])]);
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    let list = doc.child_at(root, 0).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    assert_eq!(doc.to_html(root), "<ul><li>a</li></ul>");

    let ops = structural_on(doc.mutations(), list);
    assert_eq!(
        ops,
        vec![
            Mutation::RemoveChild {
                parent: list,
                index: 2
            },
            Mutation::RemoveChild {
                parent: list,
                index: 1
            },
        ]
    );
}

#[test]
fn test_front_insertion_cascades_without_keys() {
    // Positional matching misaligns every sibling after a front insertion:
    // three operations instead of the single insert a keyed diff would do.
    let first = VNode::element(
        "div",
        None,
        vec![
            VNode::element("em", None, vec!["a".into()]),
            VNode::element("strong", None, vec!["b".into()]),
        ],
    );
    let second = VNode::element(
        "div",
        None,
        vec![
            VNode::element("span", None, vec!["x".into()]),
            VNode::element("em", None, vec!["a".into()]),
            VNode::element("strong", None, vec!["b".into()]),
        ],
    );
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    let container = doc.child_at(root, 0).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    assert_eq!(
        doc.to_html(root),
        "<div><span>x</span><em>a</em><strong>b</strong></div>"
    );

    let ops = structural_on(doc.mutations(), container);
    assert!(matches!(
        ops.as_slice(),
        [
            Mutation::ReplaceChild { index: 0, .. },
            Mutation::ReplaceChild { index: 1, .. },
            Mutation::AppendChild { .. },
        ]
    ));
}

#[test]
fn test_nested_updates_recurse_per_position() {
    let first = VNode::element(
        "div",
        None,
        vec![VNode::element(
            "p",
            props! { "className" => "old" },
            vec!["inner".into()],
        )],
    );
    let second = VNode::element(
        "div",
        None,
        vec![VNode::element(
            "p",
            props! { "className" => "new" },
            vec!["inner".into()],
        )],
    );
    let mut doc = MemoryDom::new();
    let root = doc.root();
    reconcile(&mut doc, root, Some(&first), None).unwrap();
    let paragraph = doc.child_at(doc.child_at(root, 0).unwrap(), 0).unwrap();
    doc.clear_mutations();

    reconcile(&mut doc, root, Some(&second), Some(&first)).unwrap();
    // The nested element is patched in place, not rebuilt.
    assert_eq!(doc.attr(paragraph, "class"), Some("new"));
    assert!(doc.mutations().iter().all(Mutation::is_attribute));
}

#[test]
fn test_update_against_missing_live_child_errors() {
    let tree = VNode::element("div", None, vec![]);
    let mut doc = MemoryDom::new();
    let root = doc.root();
    // Claiming `tree` was rendered when the parent is empty is a malformed
    // pairing; the engine reports the position instead of patching nothing.
    let error = reconcile(&mut doc, root, Some(&tree), Some(&tree)).unwrap_err();
    assert!(error.to_string().contains("index 0"));
}

#[test]
fn test_collaborator_failure_surfaces_through_reconcile() {
    let tree = VNode::element("div", None, vec![VNode::element("???", None, vec![])]);
    let mut doc = MemoryDom::new();
    let root = doc.root();
    let error = reconcile(&mut doc, root, Some(&tree), None).unwrap_err();
    assert!(error.to_string().contains("invalid tag name"));
}

//! Counter example driven entirely through the in-memory document.
//!
//! Renders a counter UI, dispatches click events against the live tree, and
//! reconciles a fresh description after every state change. Run with
//! `RUST_LOG=info` to see the patched tree.

use anyhow::Result;
use log::info;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use weft::{NodeId, PropValue, VNode, props, reconcile};
use weft_dom::MemoryDom;

/// Build the whole UI for the current count.
fn build_counter(count: i64, on_increment: &PropValue, on_decrement: &PropValue) -> VNode {
    VNode::element(
        "div",
        props! { "className" => "container" },
        vec![
            VNode::element("h1", None, vec!["Weft Counter".into()]),
            VNode::element(
                "div",
                props! { "className" => "count" },
                vec![count.to_string().into()],
            ),
            VNode::element(
                "div",
                props! { "className" => "button-group" },
                vec![
                    VNode::element(
                        "button",
                        props! { "className" => "decrement", "onClick" => on_decrement.clone() },
                        vec!["Decrement".into()],
                    ),
                    VNode::element(
                        "button",
                        props! { "className" => "increment", "onClick" => on_increment.clone() },
                        vec!["Increment".into()],
                    ),
                ],
            ),
        ],
    )
}

/// Depth-first search for the first node carrying the given class.
fn find_by_class(doc: &MemoryDom, node: NodeId, class: &str) -> Option<NodeId> {
    if doc.attr(node, "class") == Some(class) {
        return Some(node);
    }
    doc.children(node)
        .into_iter()
        .find_map(|child| find_by_class(doc, child, class))
}

fn main() -> Result<()> {
    env_logger::init();

    info!("starting weft counter example");

    let mut doc = MemoryDom::new();
    let root = doc.root();

    let count = Arc::new(AtomicI64::new(0));
    let increment = {
        let count = Arc::clone(&count);
        PropValue::handler(move |_context| {
            count.fetch_add(1, Ordering::SeqCst);
        })
    };
    let decrement = {
        let count = Arc::clone(&count);
        PropValue::handler(move |_context| {
            count.fetch_sub(1, Ordering::SeqCst);
        })
    };

    let first = build_counter(0, &increment, &decrement);
    reconcile(&mut doc, root, Some(&first), None)?;
    info!("initial render:\n{doc:?}");

    // Simulate three increments and one decrement against the live tree.
    let increment_button =
        find_by_class(&doc, root, "increment").expect("increment button rendered");
    let decrement_button =
        find_by_class(&doc, root, "decrement").expect("decrement button rendered");
    for _ in 0..3 {
        doc.dispatch(increment_button, "click")?;
    }
    doc.dispatch(decrement_button, "click")?;

    let second = build_counter(count.load(Ordering::SeqCst), &increment, &decrement);
    doc.clear_mutations();
    reconcile(&mut doc, root, Some(&second), Some(&first))?;

    info!(
        "after 4 clicks: count = {}, patched with {} mutations",
        count.load(Ordering::SeqCst),
        doc.mutations().len()
    );
    info!("updated tree:\n{}", doc.to_html(root));

    Ok(())
}

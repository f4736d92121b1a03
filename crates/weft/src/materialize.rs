//! One-way conversion of a VNode subtree into fresh live nodes.

use crate::properties::set_property;
use anyhow::Result;
use log::{trace, warn};
use std::sync::Arc;
use weft_core::props::{event_name_from_property, is_event_property};
use weft_core::{Document, NodeId, VNode};

/// Convert `vnode` (recursively) into a fresh, detached live subtree and
/// return its root.
///
/// Every non-framework property is applied as an attribute — including falsy
/// values; falsy removal is strictly a diff-time rule. Event properties are
/// subscribed here and only here under the default policy. The caller
/// decides where the returned node is attached; existing live nodes are
/// never mutated.
pub fn materialize<D: Document>(doc: &mut D, vnode: &VNode) -> Result<NodeId> {
    match vnode {
        VNode::Text(text) => doc.create_text(text),
        VNode::Element(element) => {
            trace!(
                "materializing <{}> with {} children",
                element.tag,
                element.children.len()
            );
            let node = doc.create_element(&element.tag)?;
            for (name, value) in &element.props {
                set_property(doc, node, name, value)?;
            }
            for (name, value) in &element.props {
                if !is_event_property(name) {
                    continue;
                }
                match value.as_handler() {
                    Some(handler) => doc.add_event_listener(
                        node,
                        &event_name_from_property(name),
                        Arc::clone(handler),
                    )?,
                    None => warn!(
                        "event property {name:?} on <{}> does not hold a handler; skipping",
                        element.tag
                    ),
                }
            }
            for child in &element.children {
                let live_child = materialize(doc, child)?;
                doc.append_child(node, live_child)?;
            }
            Ok(node)
        }
    }
}

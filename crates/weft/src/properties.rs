//! Property reconciler: minimal attribute/event mutations between prop sets.

use crate::policy::{FalsyRemoval, ReconcilePolicy};
use anyhow::Result;
use log::{trace, warn};
use std::sync::Arc;
use weft_core::props::{
    attribute_name, event_name_from_property, is_event_property, is_framework_property,
};
use weft_core::{Document, NodeId, PropValue, Props};

/// Set a single property as an attribute on a live node.
///
/// Framework properties (events, `forceUpdate`, `key`) are never rendered;
/// for everything else the value's textual form lands on
/// [`attribute_name`]`(name)`.
pub fn set_property<D: Document>(
    doc: &mut D,
    node: NodeId,
    name: &str,
    value: &PropValue,
) -> Result<()> {
    if is_framework_property(name) {
        return Ok(());
    }
    let Some(text) = value.attr_text() else {
        // A handler under a non-event name has no attribute form.
        return Ok(());
    };
    doc.set_attribute(node, attribute_name(name), &text)
}

/// Remove a single property's attribute from a live node.
/// No-op for framework properties.
pub fn remove_property<D: Document>(doc: &mut D, node: NodeId, name: &str) -> Result<()> {
    if is_framework_property(name) {
        return Ok(());
    }
    doc.remove_attribute(node, attribute_name(name))
}

/// Apply the minimal mutation moving one property from `old` to `new`.
///
/// Under the default [`FalsyRemoval::Remove`] policy an absent *or falsy*
/// new value removes the property; otherwise the property is set whenever
/// the old value is absent or strictly unequal. No deep comparison.
pub fn diff_property<D: Document>(
    doc: &mut D,
    node: NodeId,
    policy: &ReconcilePolicy,
    name: &str,
    new: Option<&PropValue>,
    old: Option<&PropValue>,
) -> Result<()> {
    let removes_falsy = policy.falsy_removal == FalsyRemoval::Remove;
    match new {
        None => remove_property(doc, node, name),
        Some(value) if removes_falsy && value.is_falsy() => remove_property(doc, node, name),
        Some(value) => {
            if old.is_none_or(|previous| previous != value) {
                set_property(doc, node, name, value)
            } else {
                Ok(())
            }
        }
    }
}

/// Move a live node's property set from `old_props` to `new_props`.
///
/// Walks the union of keys present in either map and diffs each one.
/// Event handlers are re-subscribed only when the policy asks for it; by
/// default only initial materialization binds handlers.
pub fn reconcile_properties<D: Document>(
    doc: &mut D,
    node: NodeId,
    policy: &ReconcilePolicy,
    new_props: &Props,
    old_props: Option<&Props>,
) -> Result<()> {
    let empty = Props::new();
    let old_props = old_props.unwrap_or(&empty);
    for (name, value) in new_props {
        diff_property(doc, node, policy, name, Some(value), old_props.get(name))?;
    }
    for (name, value) in old_props {
        if !new_props.contains_key(name) {
            diff_property(doc, node, policy, name, None, Some(value))?;
        }
    }
    if policy.resubscribe_events {
        resubscribe_events(doc, node, new_props, old_props)?;
    }
    Ok(())
}

/// Re-subscribe every event property whose handler identity changed.
fn resubscribe_events<D: Document>(
    doc: &mut D,
    node: NodeId,
    new_props: &Props,
    old_props: &Props,
) -> Result<()> {
    for (name, value) in new_props {
        if !is_event_property(name) {
            continue;
        }
        let Some(handler) = value.as_handler() else {
            warn!("event property {name:?} does not hold a handler; skipping");
            continue;
        };
        if old_props.get(name).is_none_or(|previous| previous != value) {
            trace!("resubscribing {name} on {node:?}");
            doc.add_event_listener(node, &event_name_from_property(name), Arc::clone(handler))?;
        }
    }
    Ok(())
}

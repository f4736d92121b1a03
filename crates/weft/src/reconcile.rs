//! Tree reconciler: diff an old and new virtual tree at each live position
//! and apply the minimal supported mutation.

use crate::materialize::materialize;
use crate::policy::{ChildMatching, ReconcilePolicy};
use crate::properties::reconcile_properties;
use anyhow::{Result, anyhow};
use log::{debug, trace};
use weft_core::{Document, NodeId, VNode};

/// Tree reconciler configured with a [`ReconcilePolicy`].
///
/// The reconciler is stateless between calls: the caller retains the old
/// VNode tree and passes it back on the next call. The `&mut` document
/// borrow gives each call exclusive access to the live tree for its full
/// duration.
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    policy: ReconcilePolicy,
}

impl Reconciler {
    /// A reconciler with the default policy (positional matching, falsy
    /// removal, no resubscription).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ReconcilePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReconcilePolicy {
        &self.policy
    }

    /// Reconcile position 0 under `parent`.
    ///
    /// Pass `old: None` for the first render of a position and the
    /// previously rendered tree afterwards; pass `new: None` to tear the
    /// position down.
    pub fn reconcile<D: Document>(
        &self,
        doc: &mut D,
        parent: NodeId,
        new: Option<&VNode>,
        old: Option<&VNode>,
    ) -> Result<()> {
        self.reconcile_at(doc, parent, new, old, 0)
    }

    /// Reconcile one position under `parent`.
    pub fn reconcile_at<D: Document>(
        &self,
        doc: &mut D,
        parent: NodeId,
        new: Option<&VNode>,
        old: Option<&VNode>,
        index: usize,
    ) -> Result<()> {
        match (new, old) {
            (Some(new), None) => {
                // Positions are walked in ascending order, so a missing old
                // node only arises past the previous child count and
                // appending lands at `index`.
                debug!("insert at {index} under {parent:?}");
                let node = materialize(doc, new)?;
                doc.append_child(parent, node)
            }
            (None, Some(_)) => {
                debug!("remove at {index} under {parent:?}");
                doc.remove_child(parent, index)
            }
            (Some(new), Some(old)) if changed(new, old) => {
                debug!("replace at {index} under {parent:?}");
                let node = materialize(doc, new)?;
                doc.replace_child(parent, index, node)
            }
            (Some(VNode::Element(new_element)), Some(VNode::Element(old_element))) => {
                let live = doc
                    .child_at(parent, index)
                    .ok_or_else(|| anyhow!("no live child at index {index} under {parent:?}"))?;
                reconcile_properties(
                    doc,
                    live,
                    &self.policy,
                    &new_element.props,
                    Some(&old_element.props),
                )?;
                match self.policy.child_matching {
                    ChildMatching::Positional => self.reconcile_children(
                        doc,
                        live,
                        &new_element.children,
                        &old_element.children,
                    ),
                    ChildMatching::Keyed => self.reconcile_children_keyed(
                        doc,
                        live,
                        &new_element.children,
                        &old_element.children,
                    ),
                }
            }
            // Both text with equal contents: nothing to patch.
            (Some(_), Some(_)) | (None, None) => Ok(()),
        }
    }

    /// Positional child walk: pair old and new children by index.
    fn reconcile_children<D: Document>(
        &self,
        doc: &mut D,
        live: NodeId,
        new_children: &[VNode],
        old_children: &[VNode],
    ) -> Result<()> {
        for (index, new_child) in new_children.iter().enumerate() {
            self.reconcile_at(doc, live, Some(new_child), old_children.get(index), index)?;
        }
        // Trailing removals run back-to-front so earlier indices stay valid.
        for index in (new_children.len()..old_children.len()).rev() {
            self.reconcile_at(doc, live, None, Some(&old_children[index]), index)?;
        }
        Ok(())
    }

    /// Keyed child walk: match by `key` prop first, fall back to position.
    fn reconcile_children_keyed<D: Document>(
        &self,
        doc: &mut D,
        live: NodeId,
        new_children: &[VNode],
        old_children: &[VNode],
    ) -> Result<()> {
        // Model of the live child list: `Some(old index)` for children that
        // still mirror an old VNode, `None` for slots consumed or freshly
        // materialized during this pass.
        let mut slots: Vec<Option<usize>> = (0..old_children.len()).map(Some).collect();

        for (index, new_child) in new_children.iter().enumerate() {
            let new_key = key_of(new_child);
            let matched = new_key.as_ref().and_then(|key| {
                (index..slots.len()).find(|&slot| {
                    slots[slot].is_some_and(|old_index| {
                        key_of(&old_children[old_index]).as_deref() == Some(key.as_str())
                    })
                })
            });

            if let Some(found) = matched {
                if found != index {
                    trace!("keyed move {found} -> {index} under {live:?}");
                    doc.move_child(live, found, index)?;
                    let slot = slots.remove(found);
                    slots.insert(index, slot);
                }
                let old = slots[index].map(|old_index| &old_children[old_index]);
                self.reconcile_at(doc, live, Some(new_child), old, index)?;
                slots[index] = None;
            } else if index < slots.len() {
                // No keyed match here. If the resident child is keyed and a
                // later new child still wants it, insert fresh instead of
                // clobbering the resident.
                let resident = slots[index];
                let resident_key =
                    resident.and_then(|old_index| key_of(&old_children[old_index]));
                let wanted_later = resident_key.as_ref().is_some_and(|key| {
                    new_children[index + 1..]
                        .iter()
                        .any(|node| key_of(node).as_deref() == Some(key.as_str()))
                });
                if wanted_later {
                    trace!("keyed insert at {index} under {live:?}");
                    let node = materialize(doc, new_child)?;
                    doc.insert_child(live, index, node)?;
                    slots.insert(index, None);
                } else {
                    let old = resident.map(|old_index| &old_children[old_index]);
                    self.reconcile_at(doc, live, Some(new_child), old, index)?;
                    slots[index] = None;
                }
            } else {
                let node = materialize(doc, new_child)?;
                doc.append_child(live, node)?;
                slots.push(None);
            }
        }

        // Trailing live children beyond the new count, back-to-front.
        for index in (new_children.len()..slots.len()).rev() {
            doc.remove_child(live, index)?;
        }
        Ok(())
    }
}

/// Whether the old live subtree at a position must be discarded outright:
/// the shapes differ, the text contents differ, or the tag names differ.
/// Property differences alone never count as changed.
fn changed(new: &VNode, old: &VNode) -> bool {
    match (new, old) {
        (VNode::Text(new_text), VNode::Text(old_text)) => new_text != old_text,
        (VNode::Element(new_element), VNode::Element(old_element)) => {
            new_element.tag != old_element.tag
        }
        _ => true,
    }
}

/// Key of a child, for keyed matching. Text nodes have no key.
fn key_of(vnode: &VNode) -> Option<String> {
    match vnode {
        VNode::Element(element) => element.key(),
        VNode::Text(_) => None,
    }
}

/// Reconcile position 0 under `parent` with the default policy.
pub fn reconcile<D: Document>(
    doc: &mut D,
    parent: NodeId,
    new: Option<&VNode>,
    old: Option<&VNode>,
) -> Result<()> {
    Reconciler::new().reconcile(doc, parent, new, old)
}

/// Reconcile an explicit position under `parent` with the default policy.
pub fn reconcile_at<D: Document>(
    doc: &mut D,
    parent: NodeId,
    new: Option<&VNode>,
    old: Option<&VNode>,
    index: usize,
) -> Result<()> {
    Reconciler::new().reconcile_at(doc, parent, new, old, index)
}

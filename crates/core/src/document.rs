//! Abstract target-tree capability.
//!
//! The engine never implements or owns a live tree; every command against it
//! flows through this trait, which a real UI tree, the in-memory test tree,
//! or an out-of-process render target can implement. Mutating operations
//! return `anyhow::Result` so collaborator failures propagate to the caller
//! unmodified.

use crate::events::EventHandler;
use crate::NodeId;
use anyhow::Result;

/// Live-tree primitives the reconciliation engine calls through.
///
/// Children are addressed positionally. A removed or replaced child is
/// destroyed together with its subtree; the engine never touches a node
/// again after issuing its removal.
pub trait Document {
    /// Create a detached live element node with the given tag name.
    fn create_element(&mut self, tag: &str) -> Result<NodeId>;

    /// Create a detached live text node holding the given string.
    fn create_text(&mut self, text: &str) -> Result<NodeId>;

    /// Set a named attribute on a live node.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()>;

    /// Remove a named attribute from a live node. Removing an attribute that
    /// is not present is a no-op, not an error.
    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<()>;

    /// Subscribe a handler for a named event on a live node. A second
    /// subscription for the same event on the same node replaces the first.
    fn add_event_listener(&mut self, node: NodeId, event: &str, handler: EventHandler)
    -> Result<()>;

    /// The child at `index` under `parent`, if any.
    fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId>;

    /// Number of children under `parent`.
    fn child_count(&self, parent: NodeId) -> usize;

    /// Append a detached node as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Insert a detached node so it ends up at `index` under `parent`.
    /// An index at or past the child count appends.
    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()>;

    /// Replace the child at `index` with a detached node, destroying the
    /// displaced subtree.
    fn replace_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()>;

    /// Remove and destroy the child subtree at `index`.
    fn remove_child(&mut self, parent: NodeId, index: usize) -> Result<()>;

    /// Detach the child at `from` and reinsert it so it ends up at `to`.
    fn move_child(&mut self, parent: NodeId, from: usize, to: usize) -> Result<()>;
}

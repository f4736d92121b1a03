//! Arena-backed live tree structure and node data.

use crate::Mutation;
use anyhow::{Result, anyhow, bail};
use indextree::{Arena, NodeId as ArenaId};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;
use weft_core::{Document, EventContext, EventHandler, NodeId};

/// What a live node is.
#[derive(Debug, Clone, Default)]
pub enum NodeKind {
    /// The mount point; exactly one per tree.
    #[default]
    Root,
    /// An element with a tag name.
    Element { tag: String },
    /// Raw text content.
    Text { text: String },
}

/// Data stored for each live node.
pub struct DomNode {
    pub id: NodeId,
    pub kind: NodeKind,
    pub attrs: SmallVec<[(String, String); 4]>,
    pub(crate) listeners: SmallVec<[(String, EventHandler); 2]>,
}

/// A mutable in-memory tree implementing the `Document` capability.
///
/// Nodes are addressed by the stable `NodeId` keys the engine uses;
/// internally they map onto an indextree arena. Every effective mutation is
/// recorded (see [`Mutation`]) so callers can observe exactly what a
/// reconciliation pass did.
pub struct MemoryDom {
    pub(crate) arena: Arena<DomNode>,
    pub(crate) root: ArenaId,
    pub(crate) handles: HashMap<NodeId, ArenaId>,
    next_id: u64,
    mutations: Vec<Mutation>,
}

impl MemoryDom {
    /// Create a new tree holding only the root node.
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(DomNode {
            id: NodeId::ROOT,
            kind: NodeKind::Root,
            attrs: SmallVec::new(),
            listeners: SmallVec::new(),
        });
        let mut handles = HashMap::new();
        handles.insert(NodeId::ROOT, root);
        Self {
            arena,
            root,
            handles,
            next_id: 0,
            mutations: Vec::new(),
        }
    }

    /// The root node ID.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Whether `node` is still part of this tree (attached or detached).
    pub fn contains(&self, node: NodeId) -> bool {
        self.handles.contains_key(&node)
    }

    /// Tag name, for element nodes.
    pub fn tag_of(&self, node: NodeId) -> Option<&str> {
        match &self.data(node)?.kind {
            NodeKind::Element { tag } => Some(tag),
            NodeKind::Root | NodeKind::Text { .. } => None,
        }
    }

    /// Text content, for text nodes.
    pub fn text_of(&self, node: NodeId) -> Option<&str> {
        match &self.data(node)?.kind {
            NodeKind::Text { text } => Some(text),
            NodeKind::Root | NodeKind::Element { .. } => None,
        }
    }

    /// Current value of a named attribute.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.data(node)?
            .attrs
            .iter()
            .find(|(attr, _)| attr.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sorted names of all attributes currently set on a node.
    pub fn attr_names(&self, node: NodeId) -> Vec<String> {
        let mut names: Vec<String> = self
            .data(node)
            .map(|data| data.attrs.iter().map(|(name, _)| name.clone()).collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Children of `parent`, in order.
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        self.handles.get(&parent).map_or_else(Vec::new, |aid| {
            aid.children(&self.arena)
                .filter_map(|child| self.arena.get(child))
                .map(|node| node.get().id)
                .collect()
        })
    }

    /// Number of event subscriptions on a node.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.data(node).map_or(0, |data| data.listeners.len())
    }

    /// Whether a handler is subscribed for the named event.
    pub fn has_listener(&self, node: NodeId, event: &str) -> bool {
        self.data(node).is_some_and(|data| {
            data.listeners.iter().any(|(name, _)| name.as_str() == event)
        })
    }

    /// Invoke the handler subscribed for `event` on `node`, passing an
    /// [`EventContext`]. Returns how many handlers ran (zero or one).
    pub fn dispatch(&self, node: NodeId, event: &str) -> Result<usize> {
        let data = self
            .data(node)
            .ok_or_else(|| anyhow!("unknown node {node:?}"))?;
        let handlers: Vec<EventHandler> = data
            .listeners
            .iter()
            .filter(|(name, _)| name.as_str() == event)
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        if handlers.is_empty() {
            log::debug!("no listener for {event:?} on {node:?}");
        }
        let context = EventContext {
            node,
            event_type: event.to_string(),
        };
        for handler in &handlers {
            handler(&context);
        }
        Ok(handlers.len())
    }

    /// All mutations recorded so far.
    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Drain the mutation log.
    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }

    /// Discard the mutation log.
    pub fn clear_mutations(&mut self) {
        self.mutations.clear();
    }

    fn arena_id(&self, node: NodeId) -> Result<ArenaId> {
        self.handles
            .get(&node)
            .copied()
            .ok_or_else(|| anyhow!("unknown node {node:?}"))
    }

    fn data(&self, node: NodeId) -> Option<&DomNode> {
        let aid = self.handles.get(&node)?;
        self.arena.get(*aid).map(indextree::Node::get)
    }

    fn data_mut(&mut self, node: NodeId) -> Result<&mut DomNode> {
        let aid = self.arena_id(node)?;
        self.arena
            .get_mut(aid)
            .map(indextree::Node::get_mut)
            .ok_or_else(|| anyhow!("stale node {node:?}"))
    }

    fn mint(&mut self, kind: NodeKind) -> NodeId {
        self.next_id += 1;
        let id = NodeId::new(self.next_id);
        let aid = self.arena.new_node(DomNode {
            id,
            kind,
            attrs: SmallVec::new(),
            listeners: SmallVec::new(),
        });
        self.handles.insert(id, aid);
        id
    }

    fn nth_child(&self, parent: NodeId, index: usize) -> Option<ArenaId> {
        let aid = self.handles.get(&parent)?;
        aid.children(&self.arena).nth(index)
    }

    /// Drop a subtree from the arena and forget its handles.
    fn destroy(&mut self, aid: ArenaId) {
        let ids: Vec<NodeId> = aid
            .descendants(&self.arena)
            .filter_map(|descendant| self.arena.get(descendant))
            .map(|node| node.get().id)
            .collect();
        for id in ids {
            self.handles.remove(&id);
        }
        aid.remove_subtree(&mut self.arena);
    }
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDom {
    fn create_element(&mut self, tag: &str) -> Result<NodeId> {
        if tag.is_empty()
            || !tag
                .chars()
                .all(|character| character.is_ascii_alphanumeric() || character == '-')
        {
            bail!("invalid tag name {tag:?}");
        }
        let id = self.mint(NodeKind::Element {
            tag: tag.to_string(),
        });
        self.mutations.push(Mutation::CreateElement {
            node: id,
            tag: tag.to_string(),
        });
        Ok(id)
    }

    fn create_text(&mut self, text: &str) -> Result<NodeId> {
        let id = self.mint(NodeKind::Text {
            text: text.to_string(),
        });
        self.mutations.push(Mutation::CreateText {
            node: id,
            text: text.to_string(),
        });
        Ok(id)
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) -> Result<()> {
        if name.is_empty() {
            bail!("invalid attribute name");
        }
        let data = self.data_mut(node)?;
        if matches!(data.kind, NodeKind::Text { .. }) {
            bail!("cannot set attribute {name:?} on a text node");
        }
        let changed = match data.attrs.iter_mut().find(|(attr, _)| attr.as_str() == name) {
            Some(pair) if pair.1.as_str() == value => false,
            Some(pair) => {
                pair.1 = value.to_string();
                true
            }
            None => {
                data.attrs.push((name.to_string(), value.to_string()));
                true
            }
        };
        if changed {
            self.mutations.push(Mutation::SetAttr {
                node,
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) -> Result<()> {
        let data = self.data_mut(node)?;
        let before = data.attrs.len();
        data.attrs.retain(|(attr, _)| attr.as_str() != name);
        if data.attrs.len() != before {
            self.mutations.push(Mutation::RemoveAttr {
                node,
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn add_event_listener(
        &mut self,
        node: NodeId,
        event: &str,
        handler: EventHandler,
    ) -> Result<()> {
        let data = self.data_mut(node)?;
        if matches!(data.kind, NodeKind::Text { .. }) {
            bail!("cannot subscribe {event:?} on a text node");
        }
        match data
            .listeners
            .iter_mut()
            .find(|(name, _)| name.as_str() == event)
        {
            Some(entry) => entry.1 = handler,
            None => data.listeners.push((event.to_string(), handler)),
        }
        self.mutations.push(Mutation::AddListener {
            node,
            event: event.to_string(),
        });
        Ok(())
    }

    fn child_at(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        let aid = self.nth_child(parent, index)?;
        self.arena.get(aid).map(|node| node.get().id)
    }

    fn child_count(&self, parent: NodeId) -> usize {
        self.handles
            .get(&parent)
            .map_or(0, |aid| aid.children(&self.arena).count())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_aid = self.arena_id(parent)?;
        let child_aid = self.arena_id(child)?;
        parent_aid.checked_append(child_aid, &mut self.arena)?;
        self.mutations.push(Mutation::AppendChild { parent, child });
        Ok(())
    }

    fn insert_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        let child_aid = self.arena_id(child)?;
        match self.nth_child(parent, index) {
            Some(at) => at.checked_insert_before(child_aid, &mut self.arena)?,
            None => {
                let parent_aid = self.arena_id(parent)?;
                parent_aid.checked_append(child_aid, &mut self.arena)?;
            }
        }
        self.mutations.push(Mutation::InsertChild {
            parent,
            index,
            child,
        });
        Ok(())
    }

    fn replace_child(&mut self, parent: NodeId, index: usize, child: NodeId) -> Result<()> {
        let child_aid = self.arena_id(child)?;
        let Some(old) = self.nth_child(parent, index) else {
            bail!("no child at index {index} to replace under {parent:?}");
        };
        old.checked_insert_before(child_aid, &mut self.arena)?;
        self.destroy(old);
        self.mutations.push(Mutation::ReplaceChild {
            parent,
            index,
            child,
        });
        Ok(())
    }

    fn remove_child(&mut self, parent: NodeId, index: usize) -> Result<()> {
        let Some(child) = self.nth_child(parent, index) else {
            bail!("no child at index {index} to remove under {parent:?}");
        };
        self.destroy(child);
        self.mutations.push(Mutation::RemoveChild { parent, index });
        Ok(())
    }

    fn move_child(&mut self, parent: NodeId, from: usize, to: usize) -> Result<()> {
        if from == to {
            return Ok(());
        }
        let Some(node) = self.nth_child(parent, from) else {
            bail!("no child at index {from} to move under {parent:?}");
        };
        node.detach(&mut self.arena);
        match self.nth_child(parent, to) {
            Some(at) => at.checked_insert_before(node, &mut self.arena)?,
            None => {
                let parent_aid = self.arena_id(parent)?;
                parent_aid.checked_append(node, &mut self.arena)?;
            }
        }
        self.mutations.push(Mutation::MoveChild { parent, from, to });
        Ok(())
    }
}

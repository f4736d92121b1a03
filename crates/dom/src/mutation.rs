//! Mutation records for observing live-tree changes.

use weft_core::NodeId;

/// A single state change applied to the live tree.
///
/// `MemoryDom` appends one record per effective `Document` command, so a
/// test can assert exactly which operations a reconciliation pass performed.
/// Commands that change nothing (removing an absent attribute, rewriting an
/// attribute to its current value) are not recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    CreateElement { node: NodeId, tag: String },
    CreateText { node: NodeId, text: String },
    SetAttr { node: NodeId, name: String, value: String },
    RemoveAttr { node: NodeId, name: String },
    AddListener { node: NodeId, event: String },
    AppendChild { parent: NodeId, child: NodeId },
    InsertChild { parent: NodeId, index: usize, child: NodeId },
    ReplaceChild { parent: NodeId, index: usize, child: NodeId },
    RemoveChild { parent: NodeId, index: usize },
    MoveChild { parent: NodeId, from: usize, to: usize },
}

impl Mutation {
    /// True for mutations that change the child list of some parent.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::AppendChild { .. }
                | Self::InsertChild { .. }
                | Self::ReplaceChild { .. }
                | Self::RemoveChild { .. }
                | Self::MoveChild { .. }
        )
    }

    /// True for mutations that change an attribute on a node.
    pub fn is_attribute(&self) -> bool {
        matches!(self, Self::SetAttr { .. } | Self::RemoveAttr { .. })
    }
}

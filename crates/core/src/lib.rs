//! Core types for virtual-tree reconciliation.
//!
//! This crate provides:
//! - `VNode`/`VElement`: immutable descriptions of a UI tree
//! - `PropValue`: the value side of the props map, including event handlers
//! - `props`: classification of property names (attribute, event, reserved)
//! - `Document`: the abstract target-tree capability the engine patches through
//!
//! Key design principles:
//! - Virtual nodes are pure data; only the live tree is ever mutated
//! - Live nodes are addressed by stable 64-bit `NodeId` keys
//! - Every live-tree command flows through the `Document` trait

/// Unique identifier for a live node in the target tree.
///
/// Minted by the document collaborator; the engine treats it as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    /// The root node ID (always present).
    pub const ROOT: NodeId = NodeId(0);

    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

pub mod document;
pub mod events;
pub mod macros;
pub mod props;
pub mod value;
pub mod vnode;

pub use document::Document;
pub use events::{EventContext, EventHandler};
pub use value::PropValue;
pub use vnode::{Props, VElement, VNode};

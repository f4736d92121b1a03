//! Event handler types shared between the engine and document implementations.

use crate::NodeId;
use std::sync::Arc;

/// Context passed to event handlers when a live node dispatches an event.
pub struct EventContext {
    /// The live node that triggered the event.
    pub node: NodeId,
    /// The event type (e.g., "click", "input").
    pub event_type: String,
}

/// Type-erased event handler subscribed on a live node.
///
/// Handlers are reference-counted: the same allocation is shared between the
/// VNode tree that declared it and the live node's listener list, and handler
/// equality during diffing is pointer identity on this Arc.
pub type EventHandler = Arc<dyn Fn(&EventContext) + Send + Sync>;

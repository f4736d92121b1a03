//! Minimal virtual-tree reconciliation engine.
//!
//! Weft builds an immutable description of a UI tree ([`VNode`]) and
//! synchronizes a live, mutable target tree to match a newly computed
//! description with minimal structural changes. The live tree is an abstract
//! capability ([`Document`]) threaded through every call, so the engine runs
//! against any tree-like target — a real UI tree, the in-memory `weft_dom`
//! tree, or an out-of-process render target.
//!
//! The engine is stateless between calls: retain the previously rendered
//! tree and pass it back on the next call.
//!
//! ```
//! use weft::{VNode, props, reconcile};
//! use weft_dom::MemoryDom;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut doc = MemoryDom::new();
//! let root = doc.root();
//!
//! // First render materializes the whole tree.
//! let first = VNode::element("div", props! { "className" => "app" }, vec!["hello".into()]);
//! reconcile(&mut doc, root, Some(&first), None)?;
//!
//! // An update patches only what differs.
//! let second = VNode::element("div", props! { "className" => "app" }, vec!["world".into()]);
//! reconcile(&mut doc, root, Some(&second), Some(&first))?;
//! assert_eq!(doc.to_html(root), r#"<div class="app">world</div>"#);
//! # Ok(())
//! # }
//! ```

pub mod materialize;
pub mod policy;
pub mod properties;
pub mod reconcile;

pub use materialize::materialize;
pub use policy::{ChildMatching, FalsyRemoval, ReconcilePolicy};
pub use reconcile::{Reconciler, reconcile, reconcile_at};

pub use weft_core::props;
pub use weft_core::{
    Document, EventContext, EventHandler, NodeId, PropValue, Props, VElement, VNode,
};

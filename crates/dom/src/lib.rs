//! In-memory live tree: an arena-backed `Document` implementation.
//!
//! This crate provides:
//! - `MemoryDom`: a mutable tree of elements and text nodes that implements
//!   the `weft_core::Document` capability
//! - `Mutation`: a record of every state change applied through that
//!   capability, for asserting exactly what a reconciliation pass did
//! - tree printing (`Debug` and `to_html`) for snapshots and diagnostics
//!
//! The tree is headless: it exists so the engine can run and be tested
//! deterministically without a rendering environment.

mod mutation;
mod printing;
mod tree;

pub use mutation::Mutation;
pub use tree::{DomNode, MemoryDom, NodeKind};

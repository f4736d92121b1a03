//! Reconciliation policies.
//!
//! Three observable behaviors of the original design are exposed as named
//! switches rather than silently fixed: falsy-value removal during property
//! diffing, event-handler resubscription on update, and the child matching
//! strategy. The defaults preserve the original behavior exactly.

/// How a present-but-falsy new property value is treated during diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FalsyRemoval {
    /// Falsy values (empty string, zero, `false`) unset the attribute.
    ///
    /// This is the documented sharp edge of the original design: a new value
    /// of `""` removes the attribute instead of setting it to empty.
    #[default]
    Remove,
    /// Only an absent new value unsets; falsy values are set like any other.
    SetExplicit,
}

/// How children are correlated between the old and new tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildMatching {
    /// Correlate purely by index. A mid-list insertion misaligns every
    /// following sibling and cascades into replaces.
    #[default]
    Positional,
    /// Match children by their `key` prop first, by index otherwise.
    Keyed,
}

/// Switches controlling reconciliation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcilePolicy {
    pub falsy_removal: FalsyRemoval,
    /// Re-subscribe event handlers whose identity changed between trees.
    /// Off by default: the original subscribes only at materialization.
    pub resubscribe_events: bool,
    pub child_matching: ChildMatching,
}

impl ReconcilePolicy {
    /// The keyed child-matching policy with all other defaults.
    pub fn keyed() -> Self {
        Self {
            child_matching: ChildMatching::Keyed,
            ..Self::default()
        }
    }
}

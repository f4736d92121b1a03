//! Property name classification.
//!
//! A property name routes to exactly one of three places: an event
//! subscription (the two-character `on` prefix), framework-reserved
//! bookkeeping that is never rendered, or a plain target-tree attribute.

/// Reserved property name that requests a forced re-render upstream.
pub const FORCE_UPDATE: &str = "forceUpdate";

/// Reserved property name carrying child identity for keyed matching.
pub const KEY: &str = "key";

/// True iff `name` denotes an event subscription property.
pub fn is_event_property(name: &str) -> bool {
    name.starts_with("on")
}

/// True iff `name` is consumed by the framework and never rendered.
pub fn is_framework_property(name: &str) -> bool {
    is_event_property(name) || name == FORCE_UPDATE || name == KEY
}

/// Derive the target-tree event name from an event property name,
/// e.g. `onClick` → `click`.
///
/// Only meaningful for names where [`is_event_property`] holds; anything
/// else yields an unspecified result.
pub fn event_name_from_property(name: &str) -> String {
    name.get(2..).unwrap_or_default().to_ascii_lowercase()
}

/// Map a property name to the attribute name it renders as.
///
/// `className` renders as the generic `class` attribute; every other name
/// renders as itself.
pub fn attribute_name(name: &str) -> &str {
    if name == "className" { "class" } else { name }
}

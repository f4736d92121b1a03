//! Property value definitions.
//!
//! `PropValue` is the value side of a props map. Attribute-like variants
//! render as text on the live tree; the handler variant is consumed by event
//! subscription and never rendered.

use crate::events::{EventContext, EventHandler};
use std::fmt;
use std::sync::Arc;

/// A property value attached to a virtual element.
#[derive(Clone)]
pub enum PropValue {
    /// Plain text.
    Text(String),
    /// Numeric value, rendered without a trailing `.0` when integral.
    Number(f64),
    /// Boolean value, rendered as `true`/`false`.
    Bool(bool),
    /// Invocable event handler; never rendered as an attribute.
    Handler(EventHandler),
}

impl PropValue {
    /// Wrap a closure as a handler value.
    pub fn handler<F>(handler: F) -> Self
    where
        F: Fn(&EventContext) + Send + Sync + 'static,
    {
        Self::Handler(Arc::new(handler))
    }

    /// True for the empty string, numeric zero, and `false`.
    /// Handlers are never falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Number(number) => *number == 0.0,
            Self::Bool(value) => !value,
            Self::Handler(_) => false,
        }
    }

    /// The handler held by this value, if any.
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            Self::Handler(handler) => Some(handler),
            Self::Text(_) | Self::Number(_) | Self::Bool(_) => None,
        }
    }

    /// Textual form rendered onto the live tree, or `None` for handlers.
    pub fn attr_text(&self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text.clone()),
            Self::Number(number) => Some(format_number(*number)),
            Self::Bool(value) => Some(value.to_string()),
            Self::Handler(_) => None,
        }
    }
}

/// Integral values render without a fractional part, e.g. `5`, not `5.0`.
fn format_number(number: f64) -> String {
    if number.is_finite() && number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

impl PartialEq for PropValue {
    /// Strict per-variant comparison, no coercion. Handlers compare by
    /// pointer identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Handler(_) => f.write_str("<handler>"),
        }
    }
}

impl From<&str> for PropValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PropValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for PropValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i64> for PropValue {
    fn from(number: i64) -> Self {
        Self::Number(number as f64)
    }
}

impl From<i32> for PropValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<u32> for PropValue {
    fn from(number: u32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EventHandler> for PropValue {
    fn from(handler: EventHandler) -> Self {
        Self::Handler(handler)
    }
}

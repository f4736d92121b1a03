//! Virtual node model: immutable descriptions of a UI tree.

use crate::props::KEY;
use crate::value::PropValue;
use std::collections::HashMap;

/// Mapping from property name to value.
///
/// Keys are unique; inserting a duplicate keeps the last write.
pub type Props = HashMap<String, PropValue>;

/// Immutable description of a UI node.
///
/// Reconciliation never mutates a VNode, only the live tree. Any string
/// appearing where a VNode is expected is a text node; there is no wrapping
/// constructor beyond the `From` impls.
#[derive(Debug, Clone, PartialEq)]
pub enum VNode {
    /// Raw text content. Carries no properties, no children.
    Text(String),
    /// An element with a tag name, properties, and ordered children.
    Element(VElement),
}

/// Data for an element node.
#[derive(Debug, Clone, PartialEq)]
pub struct VElement {
    pub tag: String,
    pub props: Props,
    pub children: Vec<VNode>,
}

impl VNode {
    /// Construct an element node. `props` accepts `None` for an empty map.
    ///
    /// `children` is stored as given: no flattening, no filtering — the
    /// caller supplies exactly the intended child list.
    pub fn element(
        tag: impl Into<String>,
        props: impl Into<Option<Props>>,
        children: Vec<VNode>,
    ) -> Self {
        Self::Element(VElement {
            tag: tag.into(),
            props: props.into().unwrap_or_default(),
            children,
        })
    }

    /// Construct a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Tag name, for element nodes.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element(element) => Some(&element.tag),
            Self::Text(_) => None,
        }
    }

    /// Properties, for element nodes.
    pub fn props(&self) -> Option<&Props> {
        match self {
            Self::Element(element) => Some(&element.props),
            Self::Text(_) => None,
        }
    }

    /// Ordered children; empty for text nodes.
    pub fn children(&self) -> &[VNode] {
        match self {
            Self::Element(element) => &element.children,
            Self::Text(_) => &[],
        }
    }

    /// Text content, for text nodes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Element(_) => None,
        }
    }
}

impl VElement {
    /// Textual form of the `key` prop, used by keyed child matching.
    pub fn key(&self) -> Option<String> {
        self.props.get(KEY).and_then(PropValue::attr_text)
    }
}

impl From<&str> for VNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for VNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_with_omitted_props() {
        let node = VNode::element("div", None, vec!["hi".into()]);
        assert_eq!(node.tag(), Some("div"));
        assert!(node.props().is_some_and(HashMap::is_empty));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn test_text_from_str() {
        let node = VNode::from("hello");
        assert!(node.is_text());
        assert_eq!(node.as_text(), Some("hello"));
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_children_stored_as_given() {
        let node = VNode::element(
            "ul",
            None,
            vec!["".into(), VNode::element("li", None, vec![])],
        );
        // Empty strings are legitimate children, not filtered out.
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0].as_text(), Some(""));
    }

    #[test]
    fn test_element_key() {
        let mut props = Props::new();
        props.insert("key".to_string(), PropValue::from("row-1"));
        let element = VElement {
            tag: "li".to_string(),
            props,
            children: vec![],
        };
        assert_eq!(element.key().as_deref(), Some("row-1"));

        let unkeyed = VElement {
            tag: "li".to_string(),
            props: Props::new(),
            children: vec![],
        };
        assert_eq!(unkeyed.key(), None);
    }
}

//! Tree printing for snapshots and diagnostics.

use crate::tree::{DomNode, MemoryDom, NodeKind};
use indextree::NodeId as ArenaId;
use std::fmt;
use weft_core::NodeId;

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(character),
        }
    }
    out
}

fn sorted_attrs(node: &DomNode) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = node.attrs.iter().cloned().collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

impl MemoryDom {
    /// Render the subtree rooted at `node` as an HTML-like string.
    ///
    /// Attributes print in sorted order so the output is deterministic; the
    /// root node prints as its children only.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        if let Some(&aid) = self.handles.get(&node) {
            self.write_html(aid, &mut out);
        }
        out
    }

    fn write_html(&self, aid: ArenaId, out: &mut String) {
        let Some(node) = self.arena.get(aid) else {
            return;
        };
        match &node.get().kind {
            NodeKind::Root => {
                for child in aid.children(&self.arena) {
                    self.write_html(child, out);
                }
            }
            NodeKind::Element { tag } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in sorted_attrs(node.get()) {
                    out.push(' ');
                    out.push_str(&name);
                    out.push_str("=\"");
                    out.push_str(&escape_text(&value));
                    out.push('"');
                }
                out.push('>');
                for child in aid.children(&self.arena) {
                    self.write_html(child, out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
            NodeKind::Text { text } => out.push_str(&escape_text(text)),
        }
    }
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
            for _ in 0..depth {
                f.write_str("  ")?;
            }
            Ok(())
        }

        fn fmt_children(
            dom: &MemoryDom,
            aid: ArenaId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            for child in aid.children(&dom.arena) {
                fmt_node(dom, child, f, depth + 1)?;
            }
            Ok(())
        }

        fn fmt_node(
            dom: &MemoryDom,
            aid: ArenaId,
            f: &mut fmt::Formatter<'_>,
            depth: usize,
        ) -> fmt::Result {
            let Some(node) = dom.arena.get(aid) else {
                return Ok(());
            };
            match &node.get().kind {
                NodeKind::Root => {
                    write_indent(f, depth)?;
                    writeln!(f, "#root")?;
                    fmt_children(dom, aid, f, depth)?;
                }
                NodeKind::Element { tag } => {
                    write_indent(f, depth)?;
                    write!(f, "<{tag}")?;
                    for (name, value) in sorted_attrs(node.get()) {
                        write!(f, " {name}={:?}", value)?;
                    }
                    writeln!(f, ">")?;
                    fmt_children(dom, aid, f, depth)?;
                }
                NodeKind::Text { text } => {
                    write_indent(f, depth)?;
                    writeln!(f, "{text:?}")?;
                }
            }
            Ok(())
        }

        fmt_node(self, self.root, f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_core::Document;

    #[test]
    fn test_to_html_sorts_attributes_and_escapes() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let div = dom.create_element("div").unwrap();
        dom.set_attribute(div, "title", "a & \"b\"").unwrap();
        dom.set_attribute(div, "class", "box").unwrap();
        let text = dom.create_text("1 < 2").unwrap();
        dom.append_child(div, text).unwrap();
        dom.append_child(root, div).unwrap();

        assert_eq!(
            dom.to_html(root),
            r#"<div class="box" title="a &amp; &quot;b&quot;">1 &lt; 2</div>"#
        );
    }

    #[test]
    fn test_debug_renders_indented_tree() {
        let mut dom = MemoryDom::new();
        let root = dom.root();
        let div = dom.create_element("div").unwrap();
        let text = dom.create_text("hi").unwrap();
        dom.append_child(div, text).unwrap();
        dom.append_child(root, div).unwrap();

        let printed = format!("{dom:?}");
        assert!(printed.contains("#root"));
        assert!(printed.contains("<div>"));
        assert!(printed.contains("\"hi\""));
    }
}

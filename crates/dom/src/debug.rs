use crate::{Document, NodeKind};
use core_types::NodeId;

fn shorten(text: &str) -> String {
    let t = text.replace('\n', " ");
    let t = t.trim();
    if t.chars().count() > 40 {
        let head: String = t.chars().take(40).collect();
        format!("{head}…")
    } else {
        t.to_string()
    }
}

/// Indented one-line-per-node rendering of a subtree, capped at `cap` nodes.
/// Used for assertions and trace output.
pub fn outline(doc: &Document, root: NodeId, cap: usize) -> Vec<String> {
    fn walk(doc: &Document, node: NodeId, depth: usize, out: &mut Vec<String>, left: &mut usize) {
        if *left == 0 {
            return;
        }
        *left -= 1;
        let indent = "  ".repeat(depth);
        match doc.kind(node) {
            Some(NodeKind::Document) => out.push(format!("{indent}#document")),
            Some(NodeKind::Element { name, attributes }) => {
                let mut line = format!("{indent}<{name}");
                for (k, v) in attributes {
                    match v {
                        Some(v) => line.push_str(&format!(r#" {k}="{v}""#)),
                        None => line.push_str(&format!(" {k}")),
                    }
                }
                line.push('>');
                out.push(line);
            }
            Some(NodeKind::Text { text }) => {
                let show = shorten(text);
                if !show.is_empty() {
                    out.push(format!("{indent}\"{show}\""));
                }
            }
            Some(NodeKind::Comment { text }) => {
                out.push(format!("{indent}<!-- {} -->", shorten(text)));
            }
            None => out.push(format!("{indent}<unknown {node}>")),
        }
        for child in doc.children(node) {
            walk(doc, *child, depth + 1, out, left);
        }
    }

    let mut out = Vec::new();
    let mut left = cap;
    walk(doc, root, 0, &mut out, &mut left);
    out
}

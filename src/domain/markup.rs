//! Markup serialization.
//!
//! Pure tree-to-text rendering for the live preview. The output is meant
//! for human reading; nothing in this crate parses it back. Attributes are
//! rendered in the node's storage order, which is lexicographic by key, so
//! output is reproducible for identical trees.

use itertools::Itertools;

use crate::domain::forest::Forest;
use crate::domain::node::Node;

/// Spaces per indent level, matching the reference output.
pub const DEFAULT_INDENT: usize = 2;

/// Render a tree as indented markup with the default indent width.
pub fn render(node: &Node) -> String {
    render_at(node, 0, DEFAULT_INDENT)
}

/// Render a tree starting at `level`, with `indent_width` spaces per level.
///
/// - The media tag renders self-closing: `<img src="a.png" />`.
/// - A childless node renders on one line: `<h1>Hello</h1>` (empty text
///   renders as `<div></div>`).
/// - A node with children renders an opening line, an optional indented
///   text line, each child one level deeper, and a closing line.
pub fn render_at(node: &Node, level: usize, indent_width: usize) -> String {
    let pad = " ".repeat(level * indent_width);
    let tag = node.tag.tag_name();
    let attrs: String = node
        .attributes
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect();

    if !node.tag.can_have_children() {
        return format!("{pad}<{tag}{attrs} />");
    }

    if node.children.is_empty() {
        let text = node.text.as_deref().unwrap_or("");
        return format!("{pad}<{tag}{attrs}>{text}</{tag}>");
    }

    let mut lines = vec![format!("{pad}<{tag}{attrs}>")];
    if let Some(text) = &node.text {
        lines.push(format!("{pad}{}{text}", " ".repeat(indent_width)));
    }
    for child in &node.children {
        lines.push(render_at(child, level + 1, indent_width));
    }
    lines.push(format!("{pad}</{tag}>"));
    lines.join("\n")
}

/// Render every root of a forest, in order, newline-joined.
pub fn render_forest(forest: &Forest, indent_width: usize) -> String {
    forest
        .roots()
        .iter()
        .map(|root| render_at(root, 0, indent_width))
        .join("\n")
}

//! Document tree node.
//!
//! A `Node` owns its children exclusively, so a tree is acyclic by
//! construction and every node has exactly one owner (its parent, or the
//! session forest's root list). Attributes live in a `BTreeMap` so that
//! iteration, and therefore serialization, is deterministic (lexicographic
//! by key).

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::tag::TagType;

/// Opaque node identifier, generated on creation and stable for the node's
/// lifetime, including across moves.
pub type NodeId = Uuid;

/// A single element of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub tag: TagType,
    pub attributes: BTreeMap<String, String>,
    /// Absent means "no text", never the empty string.
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: TagType) -> Self {
        Self {
            id: Uuid::new_v4(),
            tag,
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Attach children. Ignored when the tag forbids children, keeping the
    /// media-tag invariant intact even for hand-built trees.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        if self.tag.can_have_children() {
            self.children = children;
        }
        self
    }

    /// Insert `child` at `index`, clamped to the current child count; absent
    /// index appends. Returns false (and drops nothing into place) when this
    /// node's tag forbids children.
    pub(crate) fn insert_child(&mut self, child: Node, index: Option<usize>) -> bool {
        if !self.tag.can_have_children() {
            return false;
        }
        let at = index.unwrap_or(self.children.len()).min(self.children.len());
        self.children.insert(at, child);
        true
    }

    /// Remove the descendant with `id` and return it. Direct children are
    /// checked before descending, first match wins.
    pub(crate) fn remove_descendant(&mut self, id: NodeId) -> Option<Node> {
        if let Some(pos) = self.children.iter().position(|c| c.id == id) {
            return Some(self.children.remove(pos));
        }
        self.children
            .iter_mut()
            .find_map(|child| child.remove_descendant(id))
    }

    /// Pre-order depth-first search, first match wins.
    pub fn find(&self, id: NodeId) -> Option<&Node> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub(crate) fn find_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Whether `id` names this node or any node in its subtree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.find(id).is_some()
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }
}

//! Session forest and the id-addressed mutation engine.
//!
//! A `Forest` is the ordered sequence of root nodes making up one puzzle
//! session's document. All mutation goes through the operations here, which
//! address nodes by id across the whole forest: roots in order, then
//! depth-first within each root, first match wins. Misaddressed or
//! structurally invalid operations are silent no-ops; the forest is never
//! left half-mutated.

use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::node::{Node, NodeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forest {
    roots: Vec<Node>,
}

impl Forest {
    /// A session starts with an empty forest.
    pub fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Build a forest from pre-assembled trees, preserving order. Used for
    /// candidate trees loaded from files and for tests; interactive sessions
    /// grow their forest through [`Forest::insert_child`].
    pub fn from_roots(roots: Vec<Node>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Number of root nodes.
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total node count across all roots.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(Node::node_count).sum()
    }

    /// Insert `node` into the root sequence (no `parent`) or under the node
    /// with id `parent`. The index is clamped to the target child count;
    /// absent index appends. Inserting under a node whose tag forbids
    /// children, or under an unknown id, is a no-op.
    ///
    /// Returns whether the insertion happened.
    #[instrument(level = "debug", skip(self, node), fields(id = %node.id))]
    pub fn insert_child(
        &mut self,
        node: Node,
        parent: Option<NodeId>,
        index: Option<usize>,
    ) -> bool {
        match parent {
            None => {
                let at = index.unwrap_or(self.roots.len()).min(self.roots.len());
                self.roots.insert(at, node);
                true
            }
            Some(parent_id) => match self.find_node_mut(parent_id) {
                Some(target) => target.insert_child(node, index),
                None => false,
            },
        }
    }

    /// Remove and return the node with `id`, searching roots first
    /// (order-preserving) and then each root's subtree. Unknown ids return
    /// `None` and leave the forest untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        if let Some(pos) = self.roots.iter().position(|root| root.id == id) {
            return Some(self.roots.remove(pos));
        }
        self.roots
            .iter_mut()
            .find_map(|root| root.remove_descendant(id))
    }

    /// Relocate the node with `id` under `new_parent` (or to the root
    /// sequence) at `index`, keeping its id and subtree intact.
    ///
    /// Validation happens before anything is detached, so a failed move
    /// leaves the node where it was:
    /// - unknown `id` is a no-op,
    /// - a destination inside the moved subtree (including the node itself)
    ///   is rejected with [`DomainError::InvalidMove`],
    /// - an unknown destination, or one whose tag forbids children, is a
    ///   no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn move_node(
        &mut self,
        id: NodeId,
        new_parent: Option<NodeId>,
        index: Option<usize>,
    ) -> DomainResult<()> {
        if let Some(parent_id) = new_parent {
            let Some(moving) = self.find_node(id) else {
                return Ok(());
            };
            if moving.contains(parent_id) {
                return Err(DomainError::InvalidMove {
                    node: id,
                    target: parent_id,
                });
            }
            match self.find_node(parent_id) {
                Some(target) if target.tag.can_have_children() => {}
                _ => return Ok(()),
            }
        }
        if let Some(node) = self.remove_node(id) {
            self.insert_child(node, new_parent, index);
        }
        Ok(())
    }

    /// Set the node's text content; an empty string clears it. Returns
    /// whether a node was updated.
    #[instrument(level = "debug", skip(self, text))]
    pub fn update_text(&mut self, id: NodeId, text: &str) -> bool {
        match self.find_node_mut(id) {
            Some(node) => {
                node.text = if text.is_empty() {
                    None
                } else {
                    Some(text.to_string())
                };
                true
            }
            None => false,
        }
    }

    /// Set (`Some`) or remove (`None`) one attribute. Returns whether a node
    /// was updated.
    #[instrument(level = "debug", skip(self, key, value))]
    pub fn update_attribute(&mut self, id: NodeId, key: &str, value: Option<&str>) -> bool {
        match self.find_node_mut(id) {
            Some(node) => {
                match value {
                    Some(value) => {
                        node.attributes.insert(key.to_string(), value.to_string());
                    }
                    None => {
                        node.attributes.remove(key);
                    }
                }
                true
            }
            None => false,
        }
    }

    /// Read-only lookup: roots in order, depth-first within each, first
    /// match wins.
    #[instrument(level = "trace", skip(self))]
    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    fn find_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.roots.iter_mut().find_map(|root| root.find_mut(id))
    }
}

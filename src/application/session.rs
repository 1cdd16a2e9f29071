//! Puzzle session: one level plus the forest the player is building.
//!
//! The session is the single writer for its forest. External input sources
//! (drag-and-drop, the gesture pipeline) marshal their events into the
//! operations here on one thread; read-side views (markup, layout, verdict)
//! recompute from scratch on demand, so no incremental state is kept.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::compare;
use crate::domain::forest::Forest;
use crate::domain::layout::{self, LayoutParams, NodeGeometry};
use crate::domain::level::Level;
use crate::domain::markup;
use crate::domain::node::{Node, NodeId};
use crate::domain::tag::TagType;
use crate::domain::DomainResult;

/// A drop/insert request from the UI. The tag arrives as an identifier
/// string; unresolvable identifiers are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    pub tag: String,
    pub parent: Option<NodeId>,
    pub index: Option<usize>,
}

/// Outcome of a completion check. `hints` is empty when correct, otherwise
/// ordered discrepancy hints against the level target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub correct: bool,
    pub hints: Vec<String>,
}

#[derive(Debug)]
pub struct PuzzleSession {
    level: Level,
    forest: Forest,
    selected: Option<NodeId>,
}

impl PuzzleSession {
    /// Start a session with an empty forest.
    pub fn new(level: Level) -> Self {
        Self {
            level,
            forest: Forest::new(),
            selected: None,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn select(&mut self, id: Option<NodeId>) {
        self.selected = id;
    }

    /// Create a fresh node of `tag` and insert it. Returns the new node's id
    /// when the insertion happened.
    pub fn insert_tag(
        &mut self,
        tag: TagType,
        parent: Option<NodeId>,
        index: Option<usize>,
    ) -> Option<NodeId> {
        let node = Node::new(tag);
        let id = node.id;
        self.forest.insert_child(node, parent, index).then_some(id)
    }

    /// Resolve a drop event's tag identifier against the closed set and
    /// insert. Unresolvable identifiers are ignored without error.
    pub fn apply_drop(&mut self, event: &DropEvent) -> Option<NodeId> {
        match event.tag.parse::<TagType>() {
            Ok(tag) => self.insert_tag(tag, event.parent, event.index),
            Err(_) => {
                debug!(identifier = %event.tag, "ignoring drop with unresolvable tag identifier");
                None
            }
        }
    }

    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.forest.remove_node(id)
    }

    pub fn move_node(
        &mut self,
        id: NodeId,
        new_parent: Option<NodeId>,
        index: Option<usize>,
    ) -> DomainResult<()> {
        self.forest.move_node(id, new_parent, index)
    }

    pub fn update_text(&mut self, id: NodeId, text: &str) -> bool {
        self.forest.update_text(id, text)
    }

    pub fn update_attribute(&mut self, id: NodeId, key: &str, value: Option<&str>) -> bool {
        self.forest.update_attribute(id, key, value)
    }

    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.forest.find_node(id)
    }

    /// Check the forest against the level target: correct iff the forest
    /// holds exactly one root matching the target tree. When incorrect, the
    /// hints compare the first root (or nothing) against the target.
    pub fn check(&self) -> Verdict {
        let correct = compare::forest_matches(&self.forest, &self.level.target);
        let hints = if correct {
            Vec::new()
        } else {
            compare::hints(self.forest.roots().first(), &self.level.target)
        };
        Verdict { correct, hints }
    }

    /// Current forest as markup text.
    pub fn markup(&self) -> String {
        markup::render_forest(&self.forest, markup::DEFAULT_INDENT)
    }

    /// Current forest as renderable geometry.
    pub fn layout(&self, params: &LayoutParams) -> BTreeMap<NodeId, NodeGeometry> {
        layout::layout_forest(&self.forest, params)
    }
}

//! Session progress: which levels are completed and therefore unlocked.
//!
//! Kept outside the tree engine entirely; the host owns one of these per
//! player and consults it before starting sessions.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Progress {
    completed: HashSet<u32>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first level is always unlocked; every other level unlocks when
    /// its predecessor is completed.
    pub fn is_unlocked(&self, level_id: u32) -> bool {
        level_id <= 1 || self.completed.contains(&(level_id - 1))
    }

    pub fn mark_completed(&mut self, level_id: u32) {
        self.completed.insert(level_id);
    }

    pub fn is_completed(&self, level_id: u32) -> bool {
        self.completed.contains(&level_id)
    }
}

//! Domain-level errors.
//!
//! The mutation engine treats unknown ids, structural violations and
//! unresolvable tag identifiers as silent no-ops, so almost nothing here can
//! fail. The one distinct outcome is a move whose destination would swallow
//! the moved subtree.

use thiserror::Error;

use crate::domain::node::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot move node {node} under {target}: target is inside the moved subtree")]
    InvalidMove { node: NodeId, target: NodeId },
}

pub type DomainResult<T> = Result<T, DomainError>;

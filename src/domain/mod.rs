//! Domain layer: the document tree engine.
//!
//! Pure data structures and algorithms; no I/O. The read-side modules
//! (compare, markup, layout) never mutate; only the forest's mutation
//! operations do, always through id lookup.

pub mod compare;
pub mod error;
pub mod forest;
pub mod layout;
pub mod level;
pub mod markup;
pub mod node;
pub mod tag;

pub use error::{DomainError, DomainResult};
pub use forest::Forest;
pub use layout::{LayoutParams, NodeGeometry, Vec3};
pub use level::{Difficulty, Level, LevelError};
pub use node::{Node, NodeId};
pub use tag::{TagCategory, TagType, UnknownTag};

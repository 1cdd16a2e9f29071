//! Application layer: session orchestration over the domain engine.

pub mod progress;
pub mod session;

pub use progress::Progress;
pub use session::{DropEvent, PuzzleSession, Verdict};

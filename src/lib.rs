//! spatialdom: a document tree puzzle engine.
//!
//! Players assemble a small markup-like document out of tag blocks; the
//! engine owns the tree model and its id-addressed mutations, compares the
//! result against a level's target tree, explains discrepancies, serializes
//! to markup text, and computes a 3-D layout for rendering.
//!
//! Layers:
//! - [`domain`]: the tree engine itself (pure, no I/O)
//! - [`application`]: puzzle sessions and progress on top of it
//! - [`cli`]: the command-line surface

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Document tree puzzle engine: build, compare, serialize and lay out markup trees
#[derive(Parser, Debug)]
#[command(name = "spatialdom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Load levels from a TOML file instead of the built-in catalog
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub levels: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List levels with difficulty
    Levels,

    /// List the tag palette grouped by category
    Tags,

    /// Show a level's target as an ASCII tree
    Show {
        /// Level id
        level: u32,
    },

    /// Print a level's target markup
    Target {
        /// Level id
        level: u32,
    },

    /// Print the computed 3-D layout of a level's target
    Layout {
        /// Level id
        level: u32,
    },

    /// Check a candidate tree file against a level's target
    Check {
        /// Level id
        level: u32,
        /// Candidate tree file (TOML, `[[roots]]` tables)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        tree: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

//! Command dispatch: each subcommand drives the engine and prints results.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::process;

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::domain::compare;
use crate::domain::forest::Forest;
use crate::domain::layout::{self, NodeGeometry};
use crate::domain::level::{self, Level};
use crate::domain::markup;
use crate::domain::node::{Node, NodeId};
use crate::domain::tag::{TagCategory, TagType};
use crate::exitcode;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load()?;
    let levels = match &cli.levels {
        Some(path) => level::load_levels(path)?,
        None => level::catalog(),
    };

    match &cli.command {
        Some(Commands::Levels) => _levels(&levels),
        Some(Commands::Tags) => _tags(),
        Some(Commands::Show { level }) => _show(&levels, *level),
        Some(Commands::Target { level }) => _target(&levels, *level, &settings),
        Some(Commands::Layout { level }) => _layout(&levels, *level, &settings),
        Some(Commands::Check { level, tree }) => _check(&levels, *level, tree, &settings),
        Some(Commands::Completion { shell }) => {
            generate(*shell, &mut Cli::command(), "spatialdom", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(levels))]
fn _levels(levels: &[Level]) -> CliResult<()> {
    for level in levels {
        output::info(&format!(
            "{:>3}  {:<5} {:<14} {} ({})",
            level.id,
            "★".repeat(level.difficulty.star_count()),
            level.difficulty.label(),
            level.title,
            level.subtitle
        ));
    }
    Ok(())
}

#[instrument]
fn _tags() -> CliResult<()> {
    for category in [
        TagCategory::Structural,
        TagCategory::Typography,
        TagCategory::Media,
    ] {
        output::header(category.label());
        for tag in TagType::ALL.iter().filter(|tag| tag.category() == category) {
            output::detail(&format!("{:<10} {}", tag.display_name(), tag.symbol()));
        }
    }
    Ok(())
}

#[instrument(skip(levels))]
fn _show(levels: &[Level], id: u32) -> CliResult<()> {
    let level = level::find(levels, id)?;
    output::header(&format!("Level {}: {}", level.id, level.title));
    output::info(&level.description);
    output::info(&display_tree(&level.target));
    output::info(&format!(
        "{} nodes, {} levels deep",
        level.target.node_count(),
        level.target.depth()
    ));
    Ok(())
}

#[instrument(skip(levels, settings))]
fn _target(levels: &[Level], id: u32, settings: &Settings) -> CliResult<()> {
    let level = level::find(levels, id)?;
    output::info(&markup::render_at(&level.target, 0, settings.indent_width));
    Ok(())
}

#[instrument(skip(levels, settings))]
fn _layout(levels: &[Level], id: u32, settings: &Settings) -> CliResult<()> {
    let level = level::find(levels, id)?;
    let geometry = layout::layout_tree(&level.target, &settings.layout);
    debug!("computed geometry for {} nodes", geometry.len());
    print_geometry(&level.target, &geometry, 0);
    Ok(())
}

#[instrument(skip(levels, settings))]
fn _check(levels: &[Level], id: u32, tree_path: &Path, settings: &Settings) -> CliResult<()> {
    let level = level::find(levels, id)?;
    let forest = Forest::from_roots(level::load_tree(tree_path)?);
    debug!("loaded candidate forest with {} roots", forest.len());

    if compare::forest_matches(&forest, &level.target) {
        output::success(&format!("Tree matches level {} ({}).", level.id, level.title));
        return Ok(());
    }

    output::failure(&format!(
        "Tree does not match level {} ({}).",
        level.id, level.title
    ));
    for hint in compare::hints(forest.roots().first(), &level.target) {
        output::detail(&hint);
    }
    output::info("");
    output::info(&markup::render_forest(&forest, settings.indent_width));
    process::exit(exitcode::MISMATCH);
}

/// Target tree as a termtree, one line per node with attributes and text.
fn display_tree(node: &Node) -> Tree<String> {
    let mut label = node.tag.display_name().to_string();
    for (key, value) in &node.attributes {
        label.push_str(&format!(" {key}=\"{value}\""));
    }
    if let Some(text) = &node.text {
        label.push_str(&format!(" \"{text}\""));
    }
    Tree::new(label).with_leaves(node.children.iter().map(display_tree))
}

fn print_geometry(node: &Node, geometry: &BTreeMap<NodeId, NodeGeometry>, indent: usize) {
    if let Some(geo) = geometry.get(&node.id) {
        output::info(&format!(
            "{}{:<10} pos {}  size {}  depth {}",
            "  ".repeat(indent),
            node.tag.display_name(),
            geo.position,
            geo.size,
            geo.depth
        ));
    }
    for child in &node.children {
        print_geometry(child, geometry, indent + 1);
    }
}

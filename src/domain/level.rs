//! Level definitions: the built-in catalog and TOML level files.
//!
//! A level is read-only input to the engine: a target tree the player's
//! forest must match plus presentation metadata. The `available_tags`
//! whitelist restricts which palette tiles a UI offers; the mutation engine
//! itself deliberately does not consult it.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::node::Node;
use crate::domain::tag::TagType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn star_count(&self) -> usize {
        match self {
            Difficulty::Beginner => 1,
            Difficulty::Intermediate => 2,
            Difficulty::Advanced => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One puzzle definition.
#[derive(Debug, Clone)]
pub struct Level {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// The reference tree the player's forest must match.
    pub target: Node,
    /// Tags the UI offers for this level.
    pub available_tags: Vec<TagType>,
}

/// The built-in catalog, easiest first.
pub fn catalog() -> Vec<Level> {
    vec![
        Level {
            id: 1,
            title: "Hello Web".to_string(),
            subtitle: "Heading + Paragraph".to_string(),
            description: "Build a simple page with a heading and paragraph inside a div."
                .to_string(),
            difficulty: Difficulty::Beginner,
            target: Node::new(TagType::Div).with_children(vec![
                Node::new(TagType::H1).with_text("Hello World"),
                Node::new(TagType::P).with_text("Welcome to SpatialDOM!"),
            ]),
            available_tags: vec![TagType::Div, TagType::H1, TagType::P],
        },
        Level {
            id: 2,
            title: "Profile Card".to_string(),
            subtitle: "Nested Structure".to_string(),
            description: "Create a profile card with an image, name, and bio.".to_string(),
            difficulty: Difficulty::Intermediate,
            target: Node::new(TagType::Div).with_children(vec![
                Node::new(TagType::Img)
                    .with_attribute("src", "avatar.png")
                    .with_attribute("alt", "Profile photo"),
                Node::new(TagType::H2).with_text("Jane Doe"),
                Node::new(TagType::P).with_text("iOS Developer & Designer"),
            ]),
            available_tags: vec![
                TagType::Div,
                TagType::H2,
                TagType::P,
                TagType::Img,
                TagType::Span,
            ],
        },
        Level {
            id: 3,
            title: "Page Layout".to_string(),
            subtitle: "Multi-Section".to_string(),
            description: "Build a full page with header, main content, and footer.".to_string(),
            difficulty: Difficulty::Advanced,
            target: Node::new(TagType::Div).with_children(vec![
                Node::new(TagType::Header)
                    .with_children(vec![Node::new(TagType::H1).with_text("My Site")]),
                Node::new(TagType::Main).with_children(vec![
                    Node::new(TagType::H2).with_text("Welcome"),
                    Node::new(TagType::P).with_text("This is the main content."),
                ]),
                Node::new(TagType::Footer)
                    .with_children(vec![Node::new(TagType::P).with_text("© 2026")]),
            ]),
            available_tags: vec![
                TagType::Div,
                TagType::Header,
                TagType::Main,
                TagType::Footer,
                TagType::H1,
                TagType::H2,
                TagType::P,
            ],
        },
    ]
}

/// Find a level by id.
pub fn find(levels: &[Level], id: u32) -> LevelResult<&Level> {
    levels
        .iter()
        .find(|level| level.id == id)
        .ok_or(LevelError::LevelNotFound(id))
}

/// Declarative tree node as it appears in level and tree files.
///
/// Unlike runtime drop events, file input is validated: unknown tags and
/// children under the media tag are load-time errors, not silent no-ops.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    pub fn into_node(self) -> LevelResult<Node> {
        let tag: TagType = self
            .tag
            .parse()
            .map_err(|_| LevelError::UnknownTag(self.tag.clone()))?;
        if !self.children.is_empty() && !tag.can_have_children() {
            return Err(LevelError::ChildrenNotAllowed(self.tag));
        }

        let mut node = Node::new(tag);
        node.attributes = self.attributes;
        node.text = self.text.filter(|text| !text.is_empty());
        for child in self.children {
            node.children.push(child.into_node()?);
        }
        Ok(node)
    }
}

#[derive(Debug, Deserialize)]
struct LevelSpec {
    id: u32,
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    description: String,
    difficulty: Difficulty,
    #[serde(default)]
    available_tags: Vec<String>,
    target: NodeSpec,
}

#[derive(Debug, Deserialize)]
struct LevelFile {
    #[serde(default)]
    levels: Vec<LevelSpec>,
}

#[derive(Debug, Deserialize)]
struct TreeFile {
    #[serde(default)]
    roots: Vec<NodeSpec>,
}

/// Parse a `[[levels]]` TOML document.
pub fn parse_levels(input: &str) -> LevelResult<Vec<Level>> {
    let file: LevelFile = toml::from_str(input)?;
    file.levels
        .into_iter()
        .map(|spec| {
            let available_tags = spec
                .available_tags
                .iter()
                .map(|name| {
                    name.parse()
                        .map_err(|_| LevelError::UnknownTag(name.clone()))
                })
                .collect::<LevelResult<Vec<TagType>>>()?;
            Ok(Level {
                id: spec.id,
                title: spec.title,
                subtitle: spec.subtitle,
                description: spec.description,
                difficulty: spec.difficulty,
                target: spec.target.into_node()?,
                available_tags,
            })
        })
        .collect()
}

/// Load levels from a TOML file on disk.
pub fn load_levels(path: &Path) -> LevelResult<Vec<Level>> {
    parse_levels(&fs::read_to_string(path)?)
}

/// Parse a `[[roots]]` TOML document into candidate trees.
pub fn parse_tree(input: &str) -> LevelResult<Vec<Node>> {
    let file: TreeFile = toml::from_str(input)?;
    file.roots.into_iter().map(NodeSpec::into_node).collect()
}

/// Load candidate trees from a TOML file on disk.
pub fn load_tree(path: &Path) -> LevelResult<Vec<Node>> {
    parse_tree(&fs::read_to_string(path)?)
}

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("unknown tag identifier: {0}")]
    UnknownTag(String),

    #[error("tag {0} cannot contain children")]
    ChildrenNotAllowed(String),

    #[error("level {0} not found")]
    LevelNotFound(u32),

    #[error("failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("invalid file format: {0}")]
    InvalidFormat(#[from] toml::de::Error),
}

pub type LevelResult<T> = Result<T, LevelError>;

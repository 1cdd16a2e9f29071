//! Closed tag set and per-tag metadata.
//!
//! Every element in a document carries exactly one `TagType`. The set is
//! fixed: metadata (category, children rule, labels) lives in match tables
//! here instead of being attached to nodes at runtime.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Palette grouping for a tag, also used to pick block colors externally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Structural,
    Typography,
    Media,
}

impl TagCategory {
    /// Display label for palette sections.
    pub fn label(&self) -> &'static str {
        match self {
            TagCategory::Structural => "Containers",
            TagCategory::Typography => "Text",
            TagCategory::Media => "Pictures",
        }
    }
}

/// One member of the closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    Div,
    Section,
    Header,
    Nav,
    Main,
    Footer,
    H1,
    H2,
    H3,
    P,
    Span,
    Img,
    A,
}

impl TagType {
    /// The full closed set, in declaration order.
    pub const ALL: [TagType; 13] = [
        TagType::Div,
        TagType::Section,
        TagType::Header,
        TagType::Nav,
        TagType::Main,
        TagType::Footer,
        TagType::H1,
        TagType::H2,
        TagType::H3,
        TagType::P,
        TagType::Span,
        TagType::Img,
        TagType::A,
    ];

    /// Bare tag name as it appears in markup output.
    pub fn tag_name(&self) -> &'static str {
        match self {
            TagType::Div => "div",
            TagType::Section => "section",
            TagType::Header => "header",
            TagType::Nav => "nav",
            TagType::Main => "main",
            TagType::Footer => "footer",
            TagType::H1 => "h1",
            TagType::H2 => "h2",
            TagType::H3 => "h3",
            TagType::P => "p",
            TagType::Span => "span",
            TagType::Img => "img",
            TagType::A => "a",
        }
    }

    /// Angle-bracketed form used in user-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TagType::Div => "<div>",
            TagType::Section => "<section>",
            TagType::Header => "<header>",
            TagType::Nav => "<nav>",
            TagType::Main => "<main>",
            TagType::Footer => "<footer>",
            TagType::H1 => "<h1>",
            TagType::H2 => "<h2>",
            TagType::H3 => "<h3>",
            TagType::P => "<p>",
            TagType::Span => "<span>",
            TagType::Img => "<img>",
            TagType::A => "<a>",
        }
    }

    pub fn category(&self) -> TagCategory {
        match self {
            TagType::Div
            | TagType::Section
            | TagType::Header
            | TagType::Nav
            | TagType::Main
            | TagType::Footer => TagCategory::Structural,
            TagType::H1 | TagType::H2 | TagType::H3 | TagType::P | TagType::Span | TagType::A => {
                TagCategory::Typography
            }
            TagType::Img => TagCategory::Media,
        }
    }

    /// Whether nodes of this tag may own children. False only for the media tag;
    /// the mutation engine rejects child insertion under such nodes.
    pub fn can_have_children(&self) -> bool {
        !matches!(self, TagType::Img)
    }

    /// Icon key for palette tiles. Presentation-only, never inspected by the engine.
    pub fn symbol(&self) -> &'static str {
        match self {
            TagType::Div => "square.dashed",
            TagType::Section => "rectangle.split.3x1",
            TagType::Header => "rectangle.topthird.inset.filled",
            TagType::Nav => "sidebar.left",
            TagType::Main => "rectangle.center.inset.filled",
            TagType::Footer => "rectangle.bottomthird.inset.filled",
            TagType::H1 => "textformat.size.larger",
            TagType::H2 => "textformat.size",
            TagType::H3 => "textformat.size.smaller",
            TagType::P => "text.alignleft",
            TagType::Span => "text.cursor",
            TagType::Img => "photo",
            TagType::A => "link",
        }
    }
}

impl fmt::Display for TagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A tag identifier string that does not resolve against the closed set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tag identifier: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for TagType {
    type Err = UnknownTag;

    /// Resolve a tag identifier (bare name, case-insensitive, surrounding
    /// whitespace ignored) against the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        TagType::ALL
            .iter()
            .copied()
            .find(|tag| tag.tag_name() == needle)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

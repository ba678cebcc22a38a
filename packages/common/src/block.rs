use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// Free-form content payload of a block. Its shape depends on the block type.
pub type Content = Map<String, Value>;

/// Free-form style overrides of a block.
pub type Style = Map<String, Value>;

/// Block type tag
///
/// The set of block types is open: any tag the builder does not know is
/// kept verbatim in [`BlockKind::Other`] and rendered as a generic block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Image,
    Gallery,
    Video,
    Social,
    Contact,
    Testimonial,
    Spacer,
    Other(String),
}

impl BlockKind {
    /// Parse a type tag. Never fails; unknown tags become `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "text" => BlockKind::Text,
            "image" => BlockKind::Image,
            "gallery" => BlockKind::Gallery,
            "video" => BlockKind::Video,
            "social" => BlockKind::Social,
            "contact" => BlockKind::Contact,
            "testimonial" => BlockKind::Testimonial,
            "spacer" => BlockKind::Spacer,
            other => BlockKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Gallery => "gallery",
            BlockKind::Video => "video",
            BlockKind::Social => "social",
            BlockKind::Contact => "contact",
            BlockKind::Testimonial => "testimonial",
            BlockKind::Spacer => "spacer",
            BlockKind::Other(tag) => tag,
        }
    }
}

impl From<&str> for BlockKind {
    fn from(tag: &str) -> Self {
        BlockKind::parse(tag)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BlockKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(BlockKind::parse(&tag))
    }
}

/// Canvas position of a block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// A single content block on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Unique within the page, assigned at creation and never changed
    pub id: String,

    #[serde(rename = "type")]
    pub kind: BlockKind,

    #[serde(default)]
    pub content: Content,

    #[serde(default)]
    pub style: Style,

    #[serde(default)]
    pub position: Position,
}

impl Block {
    /// String value of a content field, if present and a string
    pub fn content_str(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(Value::as_str)
    }
}

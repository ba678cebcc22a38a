//! Typed views over block content.
//!
//! Content is stored as an untyped JSON map. These views read the fields a
//! block type is expected to carry. Reading is tolerant: missing or
//! non-string fields read as empty and unrecognized keys are ignored.

use crate::block::{Block, BlockKind, Content};
use serde_json::Value;

pub const DEFAULT_HEADING: &str = "Your Heading Here";
pub const DEFAULT_BODY: &str =
    "Add your content here. Click to edit this text block and customize it to tell your story.";
pub const DEFAULT_IMAGE_ALT: &str = "Image description";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextContent {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialContent {
    pub instagram: String,
    pub twitter: String,
    pub linkedin: String,
    pub email: String,
}

/// Content of a block, typed by its kind
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Text(TextContent),
    Image(ImageContent),
    Social(SocialContent),
    Untyped(Content),
}

impl BlockContent {
    pub fn of(block: &Block) -> Self {
        Self::read(&block.kind, &block.content)
    }

    pub fn read(kind: &BlockKind, content: &Content) -> Self {
        match kind {
            BlockKind::Text => BlockContent::Text(TextContent::read(content)),
            BlockKind::Image => BlockContent::Image(ImageContent::read(content)),
            BlockKind::Social => BlockContent::Social(SocialContent::read(content)),
            _ => BlockContent::Untyped(content.clone()),
        }
    }
}

fn field(content: &Content, key: &str) -> String {
    content
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl TextContent {
    pub fn read(content: &Content) -> Self {
        Self {
            title: field(content, "title"),
            text: field(content, "text"),
        }
    }
}

impl ImageContent {
    pub fn read(content: &Content) -> Self {
        Self {
            src: field(content, "src"),
            alt: field(content, "alt"),
        }
    }
}

impl SocialContent {
    pub fn read(content: &Content) -> Self {
        Self {
            instagram: field(content, "instagram"),
            twitter: field(content, "twitter"),
            linkedin: field(content, "linkedin"),
            email: field(content, "email"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn content(value: Value) -> Content {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_text_read_ignores_unknown_and_non_string_fields() {
        let c = content(json!({ "title": "Hi", "text": 42, "color": "red" }));
        let text = TextContent::read(&c);

        assert_eq!(text.title, "Hi");
        assert_eq!(text.text, "");
    }

    #[test]
    fn test_block_content_dispatch() {
        let c = content(json!({ "src": "a.png", "alt": "A" }));
        match BlockContent::read(&BlockKind::Image, &c) {
            BlockContent::Image(image) => {
                assert_eq!(image.src, "a.png");
                assert_eq!(image.alt, "A");
            }
            other => panic!("Expected image content, got {:?}", other),
        }

        let untyped = BlockContent::read(&BlockKind::Gallery, &c);
        assert_eq!(untyped, BlockContent::Untyped(c));
    }

    #[test]
    fn test_social_reads_each_platform() {
        let c = content(json!({ "instagram": "https://instagram.com/me", "email": 7 }));
        let social = SocialContent::read(&c);

        assert_eq!(social.instagram, "https://instagram.com/me");
        assert_eq!(social.twitter, "");
        assert_eq!(social.email, "");
    }
}

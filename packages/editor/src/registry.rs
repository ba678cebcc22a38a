//! # Block Registry
//!
//! Dispatch table from block type tag to its default content and palette
//! entry. Types without an entry still work: they start with empty content
//! and render as a generic block.

use folio_common::{BlockKind, Content, DEFAULT_BODY, DEFAULT_HEADING, DEFAULT_IMAGE_ALT};
use serde::Serialize;
use serde_json::Value;

/// Registered behaviour of one block type
#[derive(Debug, Clone)]
pub struct BlockSpec {
    pub kind: BlockKind,

    /// Sidebar title
    pub title: &'static str,

    /// Sidebar one-liner
    pub description: &'static str,

    default_content: fn() -> Content,
}

impl BlockSpec {
    pub fn new(
        kind: BlockKind,
        title: &'static str,
        description: &'static str,
        default_content: fn() -> Content,
    ) -> Self {
        Self {
            kind,
            title,
            description,
            default_content,
        }
    }

    pub fn default_content(&self) -> Content {
        (self.default_content)()
    }
}

/// Sidebar entry for a draggable block type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    #[serde(rename = "type")]
    pub kind: BlockKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct BlockRegistry {
    specs: Vec<BlockSpec>,
}

impl BlockRegistry {
    pub fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Registry with the eight builder block types
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(BlockSpec::new(
            BlockKind::Text,
            "Text Block",
            "Add headings and paragraphs",
            text_content,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Image,
            "Image",
            "Upload and display images",
            image_content,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Gallery,
            "Image Gallery",
            "Showcase multiple images",
            Content::new,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Video,
            "Video",
            "Embed videos or upload files",
            Content::new,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Social,
            "Social Links",
            "Add social media links",
            social_content,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Contact,
            "Contact Form",
            "Let clients get in touch",
            Content::new,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Testimonial,
            "Testimonial",
            "Display client reviews",
            Content::new,
        ));
        registry.register(BlockSpec::new(
            BlockKind::Spacer,
            "Spacer",
            "Add spacing between blocks",
            Content::new,
        ));
        registry
    }

    /// Add a spec, replacing any existing spec for the same kind
    pub fn register(&mut self, spec: BlockSpec) {
        match self.specs.iter_mut().find(|s| s.kind == spec.kind) {
            Some(existing) => *existing = spec,
            None => self.specs.push(spec),
        }
    }

    pub fn spec(&self, kind: &BlockKind) -> Option<&BlockSpec> {
        self.specs.iter().find(|s| &s.kind == kind)
    }

    /// Default content for a new block. Unregistered kinds get `{}`.
    pub fn default_content(&self, kind: &BlockKind) -> Content {
        self.spec(kind)
            .map(BlockSpec::default_content)
            .unwrap_or_default()
    }

    /// Sidebar entries in registration order
    pub fn palette(&self) -> Vec<PaletteEntry> {
        self.specs
            .iter()
            .map(|spec| PaletteEntry {
                kind: spec.kind.clone(),
                title: spec.title.to_string(),
                description: spec.description.to_string(),
            })
            .collect()
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(pairs: &[(&str, &str)]) -> Content {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

fn text_content() -> Content {
    strings(&[("title", DEFAULT_HEADING), ("text", DEFAULT_BODY)])
}

fn image_content() -> Content {
    strings(&[("src", ""), ("alt", DEFAULT_IMAGE_ALT)])
}

fn social_content() -> Content {
    strings(&[
        ("instagram", ""),
        ("twitter", ""),
        ("linkedin", ""),
        ("email", ""),
    ])
}

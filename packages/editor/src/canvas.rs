//! # Canvas Renderer
//!
//! Pure mapping from blocks to a view description. Styling is left to the
//! front end; this only decides *what* each block shows.
//!
//! Unknown block types render as a generic placeholder labelled with the
//! raw type tag. Rendering never fails.

use folio_common::{
    Block, BlockContent, ImageContent, SocialContent, TextContent, DEFAULT_BODY, DEFAULT_HEADING,
};
use serde::Serialize;

/// Number of tiles shown for a gallery block
pub const GALLERY_TILES: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CanvasView {
    /// Page has no blocks yet
    Empty { title: String, hint: String },

    /// Blocks in stacking order
    Blocks { blocks: Vec<BlockView> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub id: String,
    pub selected: bool,
    pub body: BlockBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BlockBody {
    Heading { title: String, text: String },
    Image { src: String, alt: String },
    ImagePlaceholder { caption: String },
    Gallery { tiles: usize, caption: String },
    SocialLinks { links: Vec<SocialLink>, caption: String },
    Placeholder { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Render one block
pub fn render_block(block: &Block, selected: bool) -> BlockView {
    let body = match (block.kind.as_str(), BlockContent::of(block)) {
        (_, BlockContent::Text(text)) => heading(text),
        (_, BlockContent::Image(image)) => image_body(image),
        (_, BlockContent::Social(social)) => social_links(social),
        ("gallery", _) => BlockBody::Gallery {
            tiles: GALLERY_TILES,
            caption: "Click to manage gallery images".to_string(),
        },
        (tag, _) => BlockBody::Placeholder {
            label: format!("{} block", tag),
        },
    };

    BlockView {
        id: block.id.clone(),
        selected,
        body,
    }
}

/// Render a page's blocks, marking the selected one
pub fn render_canvas(blocks: &[Block], selected: Option<&str>) -> CanvasView {
    if blocks.is_empty() {
        return CanvasView::Empty {
            title: "Start Building Your Portfolio".to_string(),
            hint: "Drag content blocks from the sidebar to create your perfect portfolio page."
                .to_string(),
        };
    }

    CanvasView::Blocks {
        blocks: blocks
            .iter()
            .map(|block| render_block(block, selected == Some(block.id.as_str())))
            .collect(),
    }
}

fn or_default(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn heading(text: TextContent) -> BlockBody {
    BlockBody::Heading {
        title: or_default(text.title, DEFAULT_HEADING),
        text: or_default(text.text, DEFAULT_BODY),
    }
}

fn image_body(image: ImageContent) -> BlockBody {
    if image.src.is_empty() {
        BlockBody::ImagePlaceholder {
            caption: "Click to add image".to_string(),
        }
    } else {
        BlockBody::Image {
            src: image.src,
            alt: image.alt,
        }
    }
}

fn social_links(social: SocialContent) -> BlockBody {
    let links = [
        ("Instagram", social.instagram),
        ("Twitter", social.twitter),
        ("Linkedin", social.linkedin),
        ("Mail", social.email),
    ]
    .into_iter()
    .map(|(platform, url)| SocialLink {
        platform: platform.to_string(),
        url,
    })
    .collect();

    BlockBody::SocialLinks {
        links,
        caption: "Click to edit social links".to_string(),
    }
}

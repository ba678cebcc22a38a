use crate::document::Document;
use folio_common::Block;

/// Which block is active in the properties panel
///
/// Holds an id, not a reference: the block may be deleted underneath it,
/// in which case [`Selection::resolve`] simply finds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    block_id: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, block_id: Option<String>) {
        self.block_id = block_id;
    }

    pub fn clear(&mut self) {
        self.block_id = None;
    }

    /// Clear if `block_id` is the selected block. Returns whether it was.
    pub fn clear_if(&mut self, block_id: &str) -> bool {
        if self.is_selected(block_id) {
            self.clear();
            true
        } else {
            false
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn is_selected(&self, block_id: &str) -> bool {
        self.block_id.as_deref() == Some(block_id)
    }

    pub fn resolve<'a>(&self, doc: &'a Document) -> Option<&'a Block> {
        self.id().and_then(|id| doc.find_block(id))
    }
}

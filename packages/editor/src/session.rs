//! # Edit Session
//!
//! One user's editing state for a page: the document, the current
//! selection, the canvas drag state and the auto-saver.
//!
//! Every operation updates the in-memory document synchronously. When the
//! document actually changed, a snapshot is handed to the persister and the
//! session moves on without waiting for it.

use crate::autosave::{PersistHandle, Persister};
use crate::canvas::{render_canvas, CanvasView};
use crate::document::Document;
use crate::drop_target::DropTarget;
use crate::mutations::{Mutation, MutationError, MutationResult};
use crate::registry::BlockRegistry;
use crate::selection::Selection;
use folio_common::{Block, BlockKind};
use serde_json::Value;
use std::sync::Arc;

/// Single edit session
pub struct EditSession {
    document: Document,
    selection: Selection,
    drop_target: DropTarget,
    registry: Arc<BlockRegistry>,
    persister: Option<Arc<dyn Persister>>,
    pending_saves: Vec<PersistHandle>,
}

impl EditSession {
    /// Session without persistence
    pub fn new(document: Document) -> Self {
        Self {
            document,
            selection: Selection::new(),
            drop_target: DropTarget::new(),
            registry: Arc::new(BlockRegistry::builtin()),
            persister: None,
            pending_saves: Vec::new(),
        }
    }

    pub fn with_persister(mut self, persister: Arc<dyn Persister>) -> Self {
        self.persister = Some(persister);
        self
    }

    pub fn with_registry(mut self, registry: Arc<BlockRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    /// Apply a mutation, then auto-save if it changed the document
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        let result = mutation.apply(&mut self.document, &self.registry)?;

        tracing::debug!(
            page_id = self.document.id(),
            mutation = mutation.name(),
            changed = result.changed(),
            version = self.document.version,
            "mutation applied"
        );

        match &result {
            MutationResult::Added { block, .. } => {
                self.selection.select(Some(block.id.clone()));
            }
            MutationResult::Applied { .. } => {
                if let Mutation::DeleteBlock { block_id } = &mutation {
                    self.selection.clear_if(block_id);
                }
            }
            MutationResult::Noop { .. } => {}
        }

        if result.changed() {
            self.auto_save();
        }

        Ok(result)
    }

    /// Append a block of `kind` with default content and select it
    pub fn add_block(&mut self, kind: impl Into<BlockKind>) -> Result<Block, MutationError> {
        match self.apply(Mutation::AddBlock {
            block_type: kind.into(),
        })? {
            MutationResult::Added { block, .. } => Ok(block),
            // AddBlock always yields Added once validated
            _ => Err(MutationError::EmptyBlockType),
        }
    }

    /// Replace a block's content, style and position. Returns false for a stale id.
    pub fn update_block(&mut self, block: Block) -> bool {
        self.apply(Mutation::UpdateBlock { block })
            .map(|r| r.changed())
            .unwrap_or(false)
    }

    /// Merge one content field into a block. Returns false for a stale id.
    pub fn set_content_field(&mut self, block_id: &str, field: &str, value: Value) -> bool {
        self.apply(Mutation::SetContentField {
            block_id: block_id.to_string(),
            field: field.to_string(),
            value,
        })
        .map(|r| r.changed())
        .unwrap_or(false)
    }

    /// Remove a block, clearing the selection if it was selected.
    /// Returns false for a stale id.
    pub fn delete_block(&mut self, block_id: &str) -> bool {
        self.apply(Mutation::DeleteBlock {
            block_id: block_id.to_string(),
        })
        .map(|r| r.changed())
        .unwrap_or(false)
    }

    /// Set the selection. The id is not checked against the document.
    pub fn select_block(&mut self, block_id: Option<&str>) {
        self.selection.select(block_id.map(str::to_string));
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.id()
    }

    /// The selected block, if the selection still points at one
    pub fn selected_block(&self) -> Option<&Block> {
        self.selection.resolve(&self.document)
    }

    pub fn drag_over(&mut self) {
        self.drop_target.drag_over();
    }

    pub fn drag_leave(&mut self) {
        self.drop_target.drag_leave();
    }

    /// Drop a palette payload on the canvas, adding a block for it
    pub fn drop_payload(&mut self, payload: &str) -> Option<Block> {
        let kind = self.drop_target.drop(payload)?;
        self.add_block(kind).ok()
    }

    pub fn is_accepting_drop(&self) -> bool {
        self.drop_target.is_accepting()
    }

    pub fn canvas(&self) -> CanvasView {
        render_canvas(self.document.blocks(), self.selection.id())
    }

    /// Whether a save is still running
    pub fn is_saving(&self) -> bool {
        self.persister
            .as_ref()
            .map(|p| p.in_flight() > 0)
            .unwrap_or(false)
    }

    /// Wait for every outstanding save. Returns how many failed.
    pub async fn flush(&mut self) -> usize {
        let mut failed = 0;
        for handle in self.pending_saves.drain(..) {
            match handle.await {
                Ok(Ok(_)) => {}
                Ok(Err(_)) => failed += 1,
                Err(e) => {
                    tracing::warn!(error = %e, "auto-save task did not complete");
                    failed += 1;
                }
            }
        }
        failed
    }

    fn auto_save(&mut self) {
        let Some(persister) = &self.persister else {
            return;
        };

        let handle = persister.persist(self.document.snapshot());
        self.pending_saves.retain(|h| !h.is_finished());
        self.pending_saves.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use folio_common::NewPage;
    use serde_json::json;

    fn session() -> EditSession {
        EditSession::new(Document::new(NewPage::home(1).into_page(1, Utc::now())))
    }

    #[test]
    fn test_session_creation() {
        let session = session();

        assert!(session.blocks().is_empty());
        assert_eq!(session.selection(), None);
        assert!(!session.is_saving());
        assert!(matches!(session.canvas(), CanvasView::Empty { .. }));
    }

    #[test]
    fn test_add_selects_new_block() {
        let mut session = session();

        let first = session.add_block(BlockKind::Text).unwrap();
        assert_eq!(session.selection(), Some(first.id.as_str()));

        let second = session.add_block("social").unwrap();
        assert_eq!(session.selection(), Some(second.id.as_str()));
        assert_eq!(session.selected_block().unwrap().kind, BlockKind::Social);
    }

    #[test]
    fn test_delete_unselected_keeps_selection() {
        let mut session = session();
        let a = session.add_block("text").unwrap();
        let b = session.add_block("image").unwrap();

        session.select_block(Some(&b.id));
        assert!(session.delete_block(&a.id));
        assert_eq!(session.selection(), Some(b.id.as_str()));
    }

    #[test]
    fn test_delete_missing_leaves_everything() {
        let mut session = session();
        let a = session.add_block("text").unwrap();
        let before = session.blocks().to_vec();

        assert!(!session.delete_block("block_missing"));
        assert_eq!(session.blocks(), before.as_slice());
        assert_eq!(session.selection(), Some(a.id.as_str()));
    }

    #[test]
    fn test_select_none_and_dangling() {
        let mut session = session();
        session.add_block("text").unwrap();

        session.select_block(None);
        assert!(session.selected_block().is_none());

        session.select_block(Some("nope"));
        assert_eq!(session.selection(), Some("nope"));
        assert!(session.selected_block().is_none());
    }

    #[test]
    fn test_set_content_field_merges() {
        let mut session = session();
        let block = session.add_block("social").unwrap();

        assert!(session.set_content_field(&block.id, "twitter", json!("https://x.com/me")));
        let stored = session.selected_block().unwrap();
        assert_eq!(stored.content["twitter"], "https://x.com/me");
        assert_eq!(stored.content["instagram"], "");
        assert_eq!(stored.content.len(), 4);
    }

    #[test]
    fn test_drop_adds_block() {
        let mut session = session();

        session.drag_over();
        assert!(session.is_accepting_drop());

        let block = session.drop_payload("testimonial").unwrap();
        assert!(!session.is_accepting_drop());
        assert_eq!(block.kind, BlockKind::Testimonial);
        assert_eq!(session.blocks().len(), 1);

        assert!(session.drop_payload("").is_none());
        assert_eq!(session.blocks().len(), 1);
    }

    #[test]
    fn test_add_empty_type_is_error() {
        let mut session = session();
        assert_eq!(
            session.add_block(""),
            Err(MutationError::EmptyBlockType)
        );
        assert!(session.blocks().is_empty());
    }
}

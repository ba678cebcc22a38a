//! Integration tests for the editor crate

use folio_common::{BlockKind, NewPage, Page};
use folio_editor::{AutoSaver, CanvasView, Document, EditSession, MutationResult, Mutation};
use folio_store::{InMemoryPageStore, PageStore, StoreError, StoreResult};
use serde_json::json;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Page store whose writes always fail
#[derive(Debug, Default)]
struct FailingPageStore {
    attempts: AtomicUsize,
}

impl PageStore for FailingPageStore {
    async fn get_all(&self) -> StoreResult<Vec<Page>> {
        Ok(Vec::new())
    }

    async fn get(&self, id: u64) -> StoreResult<Page> {
        Err(StoreError::NotFound { entity: "Page", id })
    }

    async fn get_by_portfolio(&self, _portfolio_id: u64) -> StoreResult<Vec<Page>> {
        Ok(Vec::new())
    }

    async fn create(&self, page: NewPage) -> StoreResult<Page> {
        Ok(page.into_page(1, chrono::Utc::now()))
    }

    async fn update(&self, _id: u64, _page: Page) -> StoreResult<Page> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection reset".to_string()))
    }

    async fn delete(&self, _id: u64) -> StoreResult<bool> {
        Ok(false)
    }
}

async fn saved_session() -> (Arc<InMemoryPageStore>, EditSession) {
    let store = Arc::new(InMemoryPageStore::new());
    let document = Document::open_main(store.as_ref(), 1).await.unwrap();
    let session =
        EditSession::new(document).with_persister(Arc::new(AutoSaver::new(store.clone())));
    (store, session)
}

#[tokio::test]
async fn test_add_image_to_empty_page() {
    let (_store, mut session) = saved_session().await;

    let block = session.add_block("image").unwrap();

    assert_eq!(block.content["src"], "");
    assert_eq!(block.content["alt"], "Image description");
    assert_eq!(session.blocks().len(), 1);
    assert_eq!(session.selection(), Some(block.id.as_str()));
}

#[tokio::test]
async fn test_add_text_default_content_exact() {
    let (_store, mut session) = saved_session().await;

    let block = session.add_block(BlockKind::Text).unwrap();

    assert_eq!(
        serde_json::Value::Object(block.content),
        json!({
            "title": "Your Heading Here",
            "text": "Add your content here. Click to edit this text block and customize it to tell your story."
        })
    );
}

#[tokio::test]
async fn test_many_adds_have_unique_ids() {
    let (_store, mut session) = saved_session().await;

    for i in 0..200 {
        let kind = ["text", "image", "gallery", "spacer", "custom"][i % 5];
        session.add_block(kind).unwrap();
    }

    assert_eq!(session.blocks().len(), 200);
    let ids: HashSet<&str> = session.blocks().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids.len(), 200);
}

#[tokio::test]
async fn test_update_merges_title() {
    let (_store, mut session) = saved_session().await;
    let block = session.add_block("text").unwrap();

    let mut edited = block.clone();
    edited.content.insert("title".to_string(), json!("Hi"));
    assert!(session.update_block(edited));

    let stored = session.document().find_block(&block.id).unwrap();
    assert_eq!(stored.content["title"], "Hi");
    assert_eq!(stored.content["text"], block.content["text"]);
}

#[tokio::test]
async fn test_update_cannot_change_id_or_type() {
    let (_store, mut session) = saved_session().await;
    let block = session.add_block("image").unwrap();

    let mut edited = block.clone();
    edited.kind = BlockKind::Video;
    assert!(session.update_block(edited));
    assert_eq!(session.blocks()[0].kind, BlockKind::Image);

    // A different id addresses a different (missing) block
    let mut renamed = block.clone();
    renamed.id = "block_other".to_string();
    assert!(!session.update_block(renamed));
    assert_eq!(session.blocks()[0].id, block.id);
}

#[tokio::test]
async fn test_delete_middle_keeps_order() {
    let (_store, mut session) = saved_session().await;
    let a = session.add_block("text").unwrap();
    let b = session.add_block("image").unwrap();
    let c = session.add_block("social").unwrap();

    assert!(session.delete_block(&b.id));

    assert_eq!(session.blocks(), &[a, c]);
}

#[tokio::test]
async fn test_delete_selected_clears_selection_and_is_idempotent() {
    let (_store, mut session) = saved_session().await;
    session.add_block("text").unwrap();
    let b = session.add_block("image").unwrap();
    assert_eq!(session.selection(), Some(b.id.as_str()));

    assert!(session.delete_block(&b.id));
    assert_eq!(session.selection(), None);
    let after_first = session.blocks().to_vec();

    assert!(!session.delete_block(&b.id));
    assert_eq!(session.blocks(), after_first.as_slice());
}

#[tokio::test]
async fn test_every_change_is_persisted() {
    let (store, mut session) = saved_session().await;

    let block = session.add_block("text").unwrap();
    session.set_content_field(&block.id, "title", json!("Saved title"));
    session.add_block("spacer").unwrap();
    assert_eq!(session.flush().await, 0);

    let stored = store.get(session.document().id()).await.unwrap();
    assert_eq!(stored.blocks.len(), 2);
    assert_eq!(stored.blocks[0].content["title"], "Saved title");
    assert_eq!(stored.blocks, session.blocks());
}

#[tokio::test]
async fn test_noop_does_not_persist() {
    let store = Arc::new(FailingPageStore::default());
    let document = Document::open_main(store.as_ref(), 1).await.unwrap();
    let mut session =
        EditSession::new(document).with_persister(Arc::new(AutoSaver::new(store.clone())));

    session.delete_block("block_missing");
    session.select_block(Some("block_missing"));
    session.flush().await;

    assert_eq!(store.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_persist_failure_keeps_session_state() {
    let store = Arc::new(FailingPageStore::default());
    let document = Document::open_main(store.as_ref(), 1).await.unwrap();
    let mut session =
        EditSession::new(document).with_persister(Arc::new(AutoSaver::new(store.clone())));

    let first = session.add_block("text").unwrap();
    let second = session.add_block("gallery").unwrap();
    assert_eq!(session.flush().await, 2);

    assert_eq!(store.attempts.load(Ordering::SeqCst), 2);
    assert_eq!(session.blocks().len(), 2);
    assert_eq!(session.blocks()[0].id, first.id);
    assert_eq!(session.selection(), Some(second.id.as_str()));
    assert!(!session.is_saving());

    // Editing continues after failures
    assert!(session.delete_block(&first.id));
    assert_eq!(session.blocks().len(), 1);
}

#[tokio::test]
async fn test_apply_reports_outcome() {
    let (_store, mut session) = saved_session().await;

    let added = session
        .apply(Mutation::AddBlock {
            block_type: BlockKind::Contact,
        })
        .unwrap();
    let block_id = match added {
        MutationResult::Added { block, version } => {
            assert_eq!(version, 1);
            block.id
        }
        other => panic!("Expected Added, got {:?}", other),
    };

    let removed = session
        .apply(Mutation::DeleteBlock { block_id })
        .unwrap();
    assert_eq!(removed, MutationResult::Applied { version: 2 });
}

#[tokio::test]
async fn test_canvas_reflects_session() {
    let (_store, mut session) = saved_session().await;
    session.add_block("text").unwrap();
    let image = session.add_block("image").unwrap();

    match session.canvas() {
        CanvasView::Blocks { blocks } => {
            assert_eq!(blocks.len(), 2);
            assert!(blocks[1].selected);
            assert_eq!(blocks[1].id, image.id);
        }
        other => panic!("Expected blocks, got {:?}", other),
    }
}

#[tokio::test]
async fn test_reopen_loads_saved_blocks() {
    let (store, mut session) = saved_session().await;
    session.add_block("social").unwrap();
    session.flush().await;

    let reopened = Document::open_main(store.as_ref(), 1).await.unwrap();
    assert_eq!(reopened.blocks(), session.blocks());
    assert_eq!(reopened.version, 0);
}

//! # Auto-save
//!
//! Pushes the whole page to the page store after each effective mutation.
//!
//! ## Design
//!
//! - Fire-and-forget: the save runs on a spawned tokio task
//! - Failures are logged and swallowed; the session keeps its state
//! - No retry, debounce or conflict detection (last write wins)
//!
//! Must be used from within a tokio runtime.

use folio_common::Page;
use folio_store::{PageStore, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle to an in-flight save. Awaiting it is optional.
pub type PersistHandle = JoinHandle<Result<Page, StoreError>>;

/// Something that can persist a page snapshot in the background
pub trait Persister: Send + Sync {
    fn persist(&self, page: Page) -> PersistHandle;

    /// Number of saves still running
    fn in_flight(&self) -> usize;
}

/// Persister backed by a [`PageStore`]
#[derive(Debug)]
pub struct AutoSaver<S> {
    store: Arc<S>,
    in_flight: Arc<AtomicUsize>,
}

impl<S: PageStore> AutoSaver<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl<S: PageStore> Persister for AutoSaver<S> {
    fn persist(&self, page: Page) -> PersistHandle {
        let store = self.store.clone();
        let in_flight = self.in_flight.clone();
        in_flight.fetch_add(1, Ordering::SeqCst);

        tokio::spawn(async move {
            let page_id = page.id;
            let block_count = page.blocks.len();
            let result = store.update(page_id, page).await;
            in_flight.fetch_sub(1, Ordering::SeqCst);

            match &result {
                Ok(_) => tracing::debug!(page_id, block_count, "auto-save complete"),
                Err(e) => tracing::warn!(page_id, error = %e, "Auto-save failed"),
            }
            result
        })
    }

    fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::NewPage;
    use folio_store::InMemoryPageStore;

    #[tokio::test]
    async fn test_persist_updates_store() {
        let store = Arc::new(InMemoryPageStore::new());
        let mut page = store.create(NewPage::home(1)).await.unwrap();
        let saver = AutoSaver::new(store.clone());

        page.title = "Saved".to_string();
        let saved = saver.persist(page.clone()).await.unwrap().unwrap();

        assert_eq!(saved.title, "Saved");
        assert_eq!(store.get(page.id).await.unwrap().title, "Saved");
        assert_eq!(saver.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_persist_failure_is_returned_not_raised() {
        let store = Arc::new(InMemoryPageStore::new());
        let saver = AutoSaver::new(store);
        let orphan = NewPage::home(1).into_page(77, chrono::Utc::now());

        let result = saver.persist(orphan).await.unwrap();
        assert!(result.unwrap_err().is_not_found());
        assert_eq!(saver.in_flight(), 0);
    }
}

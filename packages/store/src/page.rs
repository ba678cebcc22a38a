use crate::collection::Collection;
use crate::error::StoreResult;
use crate::fixtures;
use crate::latency::Latency;
use chrono::Utc;
use folio_common::{NewPage, Page};
use std::future::Future;

/// Page persistence
///
/// Lookups by unknown id fail with [`StoreError::NotFound`](crate::StoreError::NotFound).
pub trait PageStore: Send + Sync + 'static {
    fn get_all(&self) -> impl Future<Output = StoreResult<Vec<Page>>> + Send;

    fn get(&self, id: u64) -> impl Future<Output = StoreResult<Page>> + Send;

    /// Pages of a portfolio, in store order. The first one is the main page.
    fn get_by_portfolio(
        &self,
        portfolio_id: u64,
    ) -> impl Future<Output = StoreResult<Vec<Page>>> + Send;

    fn create(&self, page: NewPage) -> impl Future<Output = StoreResult<Page>> + Send;

    /// Replace a stored page. The stored id and creation time are kept.
    fn update(&self, id: u64, page: Page) -> impl Future<Output = StoreResult<Page>> + Send;

    fn delete(&self, id: u64) -> impl Future<Output = StoreResult<bool>> + Send;
}

#[derive(Debug)]
pub struct InMemoryPageStore {
    pages: Collection<Page>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::from_pages(Vec::new())
    }

    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self {
            pages: Collection::new(pages),
        }
    }

    /// Store seeded with the bundled fixture pages
    pub fn with_fixtures() -> StoreResult<Self> {
        Ok(Self::from_pages(fixtures::pages()?))
    }

    pub fn with_latency(mut self, latency: Option<Latency>) -> Self {
        self.pages.set_latency(latency);
        self
    }
}

impl Default for InMemoryPageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PageStore for InMemoryPageStore {
    async fn get_all(&self) -> StoreResult<Vec<Page>> {
        Ok(self.pages.all().await)
    }

    async fn get(&self, id: u64) -> StoreResult<Page> {
        self.pages.get(id).await
    }

    async fn get_by_portfolio(&self, portfolio_id: u64) -> StoreResult<Vec<Page>> {
        Ok(self
            .pages
            .filter(|p| p.portfolio_id == portfolio_id)
            .await)
    }

    async fn create(&self, page: NewPage) -> StoreResult<Page> {
        let now = Utc::now();
        let created = self.pages.insert(|id| page.into_page(id, now)).await;
        tracing::debug!(page_id = created.id, portfolio_id = created.portfolio_id, "page created");
        Ok(created)
    }

    async fn update(&self, id: u64, page: Page) -> StoreResult<Page> {
        self.pages
            .replace(id, |existing| Page {
                id,
                created_at: existing.created_at,
                updated_at: Utc::now(),
                ..page
            })
            .await
    }

    async fn delete(&self, id: u64) -> StoreResult<bool> {
        self.pages.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StoreError;

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let store = InMemoryPageStore::new();

        let first = store.create(NewPage::home(1)).await.unwrap();
        let second = store.create(NewPage::home(2)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let store = InMemoryPageStore::new();

        let err = store.get(99).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                entity: "Page",
                id: 99
            }
        );
        assert_eq!(err.to_string(), "Page not found: 99");
    }

    #[tokio::test]
    async fn test_update_keeps_id_and_created_at() {
        let store = InMemoryPageStore::new();
        let created = store.create(NewPage::home(1)).await.unwrap();

        let mut edited = created.clone();
        edited.id = 500;
        edited.title = "About".to_string();
        edited.created_at = "2000-01-01T00:00:00Z".parse().unwrap();

        let updated = store.update(created.id, edited).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "About");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryPageStore::new();
        let created = store.create(NewPage::home(1)).await.unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(store.delete(created.id).await.unwrap_err().is_not_found());
        assert!(store.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_portfolio_keeps_store_order() {
        let store = InMemoryPageStore::new();
        store.create(NewPage::home(1)).await.unwrap();
        store.create(NewPage::home(2)).await.unwrap();
        let mut about = NewPage::home(1);
        about.title = "About".to_string();
        about.slug = "about".to_string();
        store.create(about).await.unwrap();

        let pages = store.get_by_portfolio(1).await.unwrap();
        let titles: Vec<&str> = pages.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Home", "About"]);
    }
}

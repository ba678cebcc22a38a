use crate::collection::Collection;
use crate::error::StoreResult;
use crate::fixtures;
use crate::latency::Latency;
use chrono::Utc;
use folio_common::{NewPortfolio, Portfolio};
use std::future::Future;

/// Portfolio persistence
pub trait PortfolioStore: Send + Sync + 'static {
    fn get_all(&self) -> impl Future<Output = StoreResult<Vec<Portfolio>>> + Send;

    fn get(&self, id: u64) -> impl Future<Output = StoreResult<Portfolio>> + Send;

    fn create(
        &self,
        portfolio: NewPortfolio,
    ) -> impl Future<Output = StoreResult<Portfolio>> + Send;

    /// Replace a stored portfolio. The stored id and creation time are kept.
    fn update(
        &self,
        id: u64,
        portfolio: Portfolio,
    ) -> impl Future<Output = StoreResult<Portfolio>> + Send;

    fn delete(&self, id: u64) -> impl Future<Output = StoreResult<bool>> + Send;
}

#[derive(Debug)]
pub struct InMemoryPortfolioStore {
    portfolios: Collection<Portfolio>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::from_portfolios(Vec::new())
    }

    pub fn from_portfolios(portfolios: Vec<Portfolio>) -> Self {
        Self {
            portfolios: Collection::new(portfolios),
        }
    }

    pub fn with_fixtures() -> StoreResult<Self> {
        Ok(Self::from_portfolios(fixtures::portfolios()?))
    }

    pub fn with_latency(mut self, latency: Option<Latency>) -> Self {
        self.portfolios.set_latency(latency);
        self
    }
}

impl Default for InMemoryPortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioStore for InMemoryPortfolioStore {
    async fn get_all(&self) -> StoreResult<Vec<Portfolio>> {
        Ok(self.portfolios.all().await)
    }

    async fn get(&self, id: u64) -> StoreResult<Portfolio> {
        self.portfolios.get(id).await
    }

    async fn create(&self, portfolio: NewPortfolio) -> StoreResult<Portfolio> {
        let now = Utc::now();
        Ok(self
            .portfolios
            .insert(|id| portfolio.into_portfolio(id, now))
            .await)
    }

    async fn update(&self, id: u64, portfolio: Portfolio) -> StoreResult<Portfolio> {
        self.portfolios
            .replace(id, |existing| Portfolio {
                id,
                created_at: existing.created_at,
                updated_at: Utc::now(),
                ..portfolio
            })
            .await
    }

    async fn delete(&self, id: u64) -> StoreResult<bool> {
        self.portfolios.remove(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_portfolio(name: &str) -> NewPortfolio {
        NewPortfolio {
            name: name.to_string(),
            subdomain: name.to_lowercase(),
            template: None,
            published: false,
            views: 0,
        }
    }

    #[tokio::test]
    async fn test_fixture_ids_continue() {
        let store = InMemoryPortfolioStore::with_fixtures().unwrap();
        let max = store
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap();

        let created = store.create(new_portfolio("Fresh")).await.unwrap();
        assert_eq!(created.id, max + 1);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let store = InMemoryPortfolioStore::new();
        let created = store.create(new_portfolio("A")).await.unwrap();

        let err = store.update(42, created).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_publish_roundtrip() {
        let store = InMemoryPortfolioStore::new();
        let created = store.create(new_portfolio("A")).await.unwrap();

        let published = store
            .update(
                created.id,
                Portfolio {
                    published: true,
                    ..created.clone()
                },
            )
            .await
            .unwrap();

        assert!(published.published);
        assert!(store.get(created.id).await.unwrap().published);
    }
}

use crate::collection::Collection;
use crate::error::StoreResult;
use crate::fixtures;
use crate::latency::Latency;
use folio_common::Template;
use std::future::Future;

/// Read-only template catalog
pub trait TemplateStore: Send + Sync + 'static {
    fn get_all(&self) -> impl Future<Output = StoreResult<Vec<Template>>> + Send;

    fn get(&self, id: u64) -> impl Future<Output = StoreResult<Template>> + Send;

    fn get_by_category(
        &self,
        category: &str,
    ) -> impl Future<Output = StoreResult<Vec<Template>>> + Send;
}

#[derive(Debug)]
pub struct InMemoryTemplateStore {
    templates: Collection<Template>,
}

impl InMemoryTemplateStore {
    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self {
            templates: Collection::new(templates),
        }
    }

    pub fn with_fixtures() -> StoreResult<Self> {
        Ok(Self::from_templates(fixtures::templates()?))
    }

    pub fn with_latency(mut self, latency: Option<Latency>) -> Self {
        self.templates.set_latency(latency);
        self
    }
}

impl TemplateStore for InMemoryTemplateStore {
    async fn get_all(&self) -> StoreResult<Vec<Template>> {
        Ok(self.templates.all().await)
    }

    async fn get(&self, id: u64) -> StoreResult<Template> {
        self.templates.get(id).await
    }

    async fn get_by_category(&self, category: &str) -> StoreResult<Vec<Template>> {
        Ok(self.templates.filter(|t| t.category == category).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_by_category() {
        let store = InMemoryTemplateStore::with_fixtures().unwrap();

        let photography = store.get_by_category("photography").await.unwrap();
        assert!(!photography.is_empty());
        assert!(photography.iter().all(|t| t.category == "photography"));

        assert!(store.get_by_category("cooking").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_template() {
        let store = InMemoryTemplateStore::with_fixtures().unwrap();
        assert!(store.get(999).await.unwrap_err().is_not_found());
    }
}

//! Record vector shared by the in-memory stores.

use crate::error::{StoreError, StoreResult};
use crate::latency::Latency;
use folio_common::{Page, Portfolio, Template};
use tokio::sync::RwLock;

pub(crate) trait Record: Clone + Send + Sync + 'static {
    const ENTITY: &'static str;

    fn id(&self) -> u64;
}

impl Record for Page {
    const ENTITY: &'static str = "Page";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Portfolio {
    const ENTITY: &'static str = "Portfolio";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Record for Template {
    const ENTITY: &'static str = "Template";

    fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug)]
pub(crate) struct Collection<T> {
    records: RwLock<Vec<T>>,
    latency: Option<Latency>,
}

impl<T: Record> Collection<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
            latency: None,
        }
    }

    pub fn set_latency(&mut self, latency: Option<Latency>) {
        self.latency = latency;
    }

    fn not_found(id: u64) -> StoreError {
        StoreError::NotFound {
            entity: T::ENTITY,
            id,
        }
    }

    pub async fn all(&self) -> Vec<T> {
        Latency::wait(self.latency).await;
        self.records.read().await.clone()
    }

    pub async fn get(&self, id: u64) -> StoreResult<T> {
        Latency::wait(self.latency).await;
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool + Send,
    {
        Latency::wait(self.latency).await;
        self.records
            .read()
            .await
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }

    /// Insert a record built from the next free id (`max + 1`, starting at 1)
    pub async fn insert<F>(&self, build: F) -> T
    where
        F: FnOnce(u64) -> T + Send,
    {
        Latency::wait(self.latency).await;
        let mut records = self.records.write().await;
        let next_id = records.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        let record = build(next_id);
        records.push(record.clone());
        record
    }

    /// Replace the record with `id` by `update(existing)`
    pub async fn replace<F>(&self, id: u64, update: F) -> StoreResult<T>
    where
        F: FnOnce(&T) -> T + Send,
    {
        Latency::wait(self.latency).await;
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        *slot = update(slot);
        Ok(slot.clone())
    }

    pub async fn remove(&self, id: u64) -> StoreResult<bool> {
        Latency::wait(self.latency).await;
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        records.remove(index);
        Ok(true)
    }
}

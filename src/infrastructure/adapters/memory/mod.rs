use async_trait::async_trait;
use chrono::Local;
use std::collections::VecDeque;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{NewResource, Resource},
    ports::CatalogStore,
};

pub struct InMemoryCatalog {
    records: RwLock<VecDeque<Resource>>,
}

impl InMemoryCatalog {
    /// Builds the store from its seed. Seed order is kept as given, so
    /// seeds are expected newest first.
    pub fn initialize(seed: Vec<Resource>) -> Self {
        tracing::debug!("Catalog initialized with {} records", seed.len());
        Self {
            records: RwLock::new(seed.into()),
        }
    }

    pub fn empty() -> Self {
        Self::initialize(Vec::new())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn add(&self, candidate: NewResource) -> Resource {
        let resource = Resource::from_submission(
            candidate,
            Uuid::new_v4().to_string(),
            Local::now().date_naive(),
        );

        let mut records = self.records.write().await;
        records.push_front(resource.clone());
        tracing::debug!("Added resource {} ({} total)", resource.id, records.len());

        resource
    }

    async fn list(&self) -> Vec<Resource> {
        self.records.read().await.iter().cloned().collect()
    }

    async fn get(&self, id: &str) -> Option<Resource> {
        self.records
            .read()
            .await
            .iter()
            .find(|resource| resource.id == id)
            .cloned()
    }

    fn store_name(&self) -> &'static str {
        "in-memory"
    }
}

use crate::domain::{NewResource, Resource};
use async_trait::async_trait;

/// Process-lifetime record store. Grows by prepending; nothing is
/// updated or removed.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn add(&self, candidate: NewResource) -> Resource;
    async fn list(&self) -> Vec<Resource>;
    async fn get(&self, id: &str) -> Option<Resource>;
    fn store_name(&self) -> &'static str;
}

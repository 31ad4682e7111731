use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::{
    domain::{validate, Category, DomainError, Query, Resource, SubmissionForm},
    ports::CatalogStore,
};

pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    submit_delay: Duration,
    submitting: AtomicBool,
}

/// Per-category entry of the catalog overview.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub description: &'static str,
    pub count: usize,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>, submit_delay: Duration) -> Self {
        Self {
            store,
            submit_delay,
            submitting: AtomicBool::new(false),
        }
    }

    pub async fn list(&self) -> Vec<Resource> {
        self.store.list().await
    }

    pub async fn browse(&self, query: &Query) -> Vec<Resource> {
        let records = self.store.list().await;
        let view: Vec<Resource> = query.apply(&records).into_iter().cloned().collect();
        tracing::debug!(
            "Query {:?} in {} matched {} of {} records",
            query.term,
            query.category,
            view.len(),
            records.len()
        );
        view
    }

    pub async fn find(&self, id: &str) -> Result<Resource, DomainError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| DomainError::ResourceNotFound(id.to_string()))
    }

    /// Validates the form, waits out the submission delay and commits.
    /// Only one submission may be pending at a time.
    pub async fn submit(&self, form: &SubmissionForm) -> Result<Resource, DomainError> {
        let _pending = SubmissionGuard::acquire(&self.submitting)?;

        let candidate = validate(form).map_err(|errors| {
            tracing::info!("Submission rejected on {} field(s)", errors.len());
            errors
        })?;

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let resource = self.store.add(candidate).await;
        tracing::info!(
            "Added \"{}\" to {} as {} ({} store)",
            resource.title,
            resource.category,
            resource.id,
            self.store.store_name()
        );
        Ok(resource)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    pub async fn category_summaries(&self) -> Vec<CategorySummary> {
        let records = self.store.list().await;
        Category::ALL
            .into_iter()
            .map(|category| CategorySummary {
                category,
                description: category.description(),
                count: records.iter().filter(|r| r.category == category).count(),
            })
            .collect()
    }
}

struct SubmissionGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmissionGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, DomainError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                tracing::warn!("Ignoring submission while another is pending");
                DomainError::SubmissionInProgress
            })?;
        Ok(Self { flag })
    }
}

impl Drop for SubmissionGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

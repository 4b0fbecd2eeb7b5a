use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Settings, StorageBackend};
use crate::domain::{ContactSubmission, Email, NewsletterSubscription};

mod memory;
mod postgres;

pub use self::memory::InMemoryStore;
pub use self::postgres::PostgresStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The backend refused a second subscription for an already registered email.
    #[error("a newsletter subscription for this email already exists")]
    DuplicateEmail,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Persistence for accepted submissions.
///
/// Both collections are append-only. Every method must be safe to call
/// concurrently on a shared instance.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn add_contact_submission(&self, submission: ContactSubmission)
        -> Result<(), StoreError>;

    async fn add_newsletter_subscription(
        &self,
        subscription: NewsletterSubscription,
    ) -> Result<(), StoreError>;

    async fn find_newsletter_subscription_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<NewsletterSubscription>, StoreError>;
}

/// Build the store selected by `storage.backend`.
///
/// The Postgres pool connects lazily. Pending migrations are applied before
/// the store is returned.
pub async fn build_store(config: &Settings) -> anyhow::Result<Arc<dyn SubmissionStore>> {
    match config.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("submissions are kept in memory and will be lost on restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StorageBackend::Postgres => {
            let store = PostgresStore::connect_lazy(&config.database);
            store.migrate().await?;
            Ok(Arc::new(store))
        }
    }
}

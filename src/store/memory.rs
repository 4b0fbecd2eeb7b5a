use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{StoreError, SubmissionStore};
use crate::domain::{ContactSubmission, Email, NewsletterSubscription};

#[derive(Debug, Default)]
struct Collections {
    contact_submissions: Vec<ContactSubmission>,
    newsletter_subscriptions: Vec<NewsletterSubscription>,
    subscription_by_email: HashMap<Email, usize>,
}

/// A store that keeps every submission in process memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<Collections>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contact submissions in the order they were added.
    pub async fn contact_submissions(&self) -> Vec<ContactSubmission> {
        self.collections.read().await.contact_submissions.clone()
    }

    /// Newsletter subscriptions in the order they were added.
    pub async fn newsletter_subscriptions(&self) -> Vec<NewsletterSubscription> {
        self.collections.read().await.newsletter_subscriptions.clone()
    }
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn add_contact_submission(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), StoreError> {
        self.collections
            .write()
            .await
            .contact_submissions
            .push(submission);
        Ok(())
    }

    async fn add_newsletter_subscription(
        &self,
        subscription: NewsletterSubscription,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.write().await;
        if collections
            .subscription_by_email
            .contains_key(&subscription.email)
        {
            return Err(StoreError::DuplicateEmail);
        }

        let index = collections.newsletter_subscriptions.len();
        collections
            .subscription_by_email
            .insert(subscription.email.clone(), index);
        collections.newsletter_subscriptions.push(subscription);
        Ok(())
    }

    async fn find_newsletter_subscription_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<NewsletterSubscription>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .subscription_by_email
            .get(email)
            .map(|&index| collections.newsletter_subscriptions[index].clone()))
    }
}

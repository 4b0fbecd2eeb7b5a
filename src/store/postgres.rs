use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, SubmissionStore};
use crate::config::DatabaseSettings;
use crate::domain::{ContactSubmission, Email, NewsletterSubscription};

/// A store backed by the `contact_submissions` and `newsletter_subscriptions` tables.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    db: PgPool,
}

impl PostgresStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub fn connect_lazy(config: &DatabaseSettings) -> Self {
        let db = PgPoolOptions::new()
            .max_connections(50)
            .acquire_timeout(std::time::Duration::from_secs(2))
            .connect_lazy_with(config.with_db());
        Self::new(db)
    }

    #[tracing::instrument(name = "running database migrations", skip(self))]
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db)
            .await
            .context("Failed to run database migrations")
    }
}

#[async_trait]
impl SubmissionStore for PostgresStore {
    #[tracing::instrument(name = "inserting contact submission into the database", skip(self, submission), fields(email = %submission.email))]
    async fn add_contact_submission(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"insert into contact_submissions (id, name, email, subject, message, created_at) values ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(Uuid::new_v4())
        .bind(submission.name.as_ref())
        .bind(submission.email.as_ref())
        .bind(submission.subject.as_str())
        .bind(submission.message.as_ref())
        .bind(submission.created_at)
        .execute(&self.db)
        .await
        .context("Failed to insert a contact submission")?;

        Ok(())
    }

    #[tracing::instrument(name = "inserting newsletter subscription into the database", skip(self, subscription), fields(email = %subscription.email))]
    async fn add_newsletter_subscription(
        &self,
        subscription: NewsletterSubscription,
    ) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"insert into newsletter_subscriptions (id, email, created_at) values ($1, $2, $3)"#,
        )
        .bind(Uuid::new_v4())
        .bind(subscription.email.as_ref())
        .bind(subscription.created_at)
        .execute(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("Failed to insert a newsletter subscription")
                .into()),
        }
    }

    #[tracing::instrument(name = "looking up newsletter subscription by email", skip(self))]
    async fn find_newsletter_subscription_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<NewsletterSubscription>, StoreError> {
        let row: Option<(String, DateTime<Utc>)> = sqlx::query_as(
            r#"select email, created_at from newsletter_subscriptions where email = $1"#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.db)
        .await
        .context("Failed to look up a newsletter subscription")?;

        let Some((email, created_at)) = row else {
            return Ok(None);
        };

        let email = Email::try_from(email)
            .map_err(|e| anyhow::anyhow!("A stored newsletter subscription has {e}"))?;
        Ok(Some(NewsletterSubscription { email, created_at }))
    }
}

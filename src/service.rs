use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::{
    validate_contact, validate_newsletter, ContactForm, ContactSubmission, NewsletterForm,
    NewsletterSubscription, ValidationError,
};
use crate::store::{StoreError, SubmissionStore};

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
    #[error("email already subscribed to newsletter")]
    DuplicateSubscription,
    #[error("failed to persist the submission")]
    PersistenceError(#[source] anyhow::Error),
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => Self::DuplicateSubscription,
            StoreError::Backend(e) => Self::PersistenceError(e),
        }
    }
}

/// The acceptance time of a submission, at the microsecond precision every
/// store backend can hold.
pub fn acceptance_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Validates incoming forms and records the accepted ones in a store.
#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn SubmissionStore>,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    #[tracing::instrument(name = "accepting a contact submission", skip(self, form), fields(email = ?form.email, subject = ?form.subject))]
    pub async fn submit_contact(
        &self,
        form: ContactForm,
    ) -> Result<ContactSubmission, SubmitError> {
        let submission = validate_contact(form)?.accept(acceptance_time());

        self.store
            .add_contact_submission(submission.clone())
            .await?;

        Ok(submission)
    }

    /// The duplicate lookup and the write are two separate store calls. A store
    /// that refuses the write for an already registered email is reported the
    /// same way as a lookup hit.
    #[tracing::instrument(name = "accepting a newsletter subscription", skip(self, form), fields(email = ?form.email))]
    pub async fn submit_newsletter(
        &self,
        form: NewsletterForm,
    ) -> Result<NewsletterSubscription, SubmitError> {
        let new_subscription = validate_newsletter(form)?;

        if self
            .store
            .find_newsletter_subscription_by_email(&new_subscription.email)
            .await?
            .is_some()
        {
            tracing::info!("email is already subscribed");
            return Err(SubmitError::DuplicateSubscription);
        }

        let subscription = new_subscription.accept(acceptance_time());
        self.store
            .add_newsletter_subscription(subscription.clone())
            .await?;

        Ok(subscription)
    }
}

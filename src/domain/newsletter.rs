use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::email::Email;
use super::validation::{ValidationError, Violations};

/// A newsletter signup exactly as posted.
#[derive(Debug, Default, Deserialize)]
pub struct NewsletterForm {
    pub email: Option<String>,
}

/// A newsletter signup that passed validation. The email is normalized so
/// that uniqueness does not depend on case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNewsletterSubscription {
    pub email: Email,
}

impl NewNewsletterSubscription {
    pub fn accept(self, created_at: DateTime<Utc>) -> NewsletterSubscription {
        NewsletterSubscription {
            email: self.email,
            created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<NewsletterForm> for NewNewsletterSubscription {
    type Error = ValidationError;
    fn try_from(form: NewsletterForm) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        match violations.check("email", form.email, Email::try_from) {
            Some(email) => Ok(Self {
                email: email.normalized(),
            }),
            None => Err(violations.into_error()),
        }
    }
}

pub fn validate_newsletter(
    form: NewsletterForm,
) -> Result<NewNewsletterSubscription, ValidationError> {
    NewNewsletterSubscription::try_from(form)
}

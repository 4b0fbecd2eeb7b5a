use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::email::Email;
use super::validation::{ValidationError, Violations};

pub mod message;
pub mod name;
pub mod subject;

pub use self::message::ContactMessage;
pub use self::name::ContactName;
pub use self::subject::Subject;

/// A contact form exactly as posted. Every field may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A contact form whose fields all passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactSubmission {
    pub name: ContactName,
    pub email: Email,
    pub subject: Subject,
    pub message: ContactMessage,
}

impl NewContactSubmission {
    pub fn accept(self, created_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

/// A contact message as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: Email,
    pub subject: Subject,
    pub message: ContactMessage,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ContactForm> for NewContactSubmission {
    type Error = ValidationError;
    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        let mut violations = Violations::default();
        let name = violations.check("name", form.name, ContactName::try_from);
        let email = violations.check("email", form.email, Email::try_from);
        let subject = violations.check("subject", form.subject, Subject::try_from);
        let message = violations.check("message", form.message, ContactMessage::try_from);

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(Self {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(violations.into_error()),
        }
    }
}

pub fn validate_contact(form: ContactForm) -> Result<NewContactSubmission, ValidationError> {
    NewContactSubmission::try_from(form)
}

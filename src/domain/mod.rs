pub mod contact;
pub mod email;
pub mod newsletter;
pub mod validation;

pub use self::contact::{validate_contact, ContactForm, ContactSubmission, NewContactSubmission};
pub use self::email::Email;
pub use self::newsletter::{
    validate_newsletter, NewNewsletterSubscription, NewsletterForm, NewsletterSubscription,
};
pub use self::validation::{FieldError, ValidationError};

use derive_more::Display;
use validator::validate_email;

/// An email address as accepted at the service boundary.
///
/// Surrounding whitespace is trimmed; the case is kept as submitted. Use
/// [`Email::normalized`] where addresses must compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if validate_email(trimmed) {
            Ok(Self(trimmed.to_owned()))
        } else {
            Err("invalid email".into())
        }
    }
}

impl Email {
    /// The lowercased form of this address.
    pub fn normalized(&self) -> Self {
        Self(self.0.to_lowercase())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

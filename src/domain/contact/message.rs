use derive_more::Display;
use unicode_segmentation::UnicodeSegmentation;

const MIN_GRAPHEMES: usize = 10;

/// The free text body of a contact form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct ContactMessage(String);

impl TryFrom<String> for ContactMessage {
    type Error = String;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().graphemes(true).count() < MIN_GRAPHEMES {
            return Err(format!("must be at least {MIN_GRAPHEMES} characters"));
        }

        Ok(Self(value))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use serde::Serialize;

/// A single violated constraint, named by the wire field it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Rejection of an input, listing every violated field in declaration order.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationError(Vec<FieldError>);

impl ValidationError {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

/// Collects violations while each field of a form is parsed, so that a
/// rejection reports all of them instead of stopping at the first.
#[derive(Default)]
pub(crate) struct Violations(Vec<FieldError>);

impl Violations {
    pub(crate) fn check<T>(
        &mut self,
        field: &str,
        value: Option<String>,
        parse: impl FnOnce(String) -> Result<T, String>,
    ) -> Option<T> {
        let Some(value) = value else {
            self.0.push(FieldError::new(field, "required"));
            return None;
        };

        match parse(value) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                self.0.push(FieldError::new(field, message));
                None
            }
        }
    }

    pub(crate) fn into_error(self) -> ValidationError {
        ValidationError(self.0)
    }
}

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::FieldError;
use crate::service::SubmitError;

mod schema;

pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// What an endpoint tells the client when a submission is refused.
pub struct Messages {
    /// Sent along with the list of violated fields.
    pub invalid: &'static str,
    /// Sent instead of any detail when the submission could not be stored.
    pub failure: &'static str,
}

pub const DUPLICATE_SUBSCRIPTION: &str = "Email already subscribed to newsletter";

/// A common error type for the submission endpoints.
///
/// Every variant is rendered as `{ "success": false, "message": ... }`. Validation
/// failures also carry the violated fields; unexpected errors are logged with
/// their full cause chain but only the generic message reaches the client.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    ValidationError {
        message: &'static str,
        errors: Vec<FieldError>,
    },
    #[error("{0}")]
    Rejected(&'static str),
    #[error("{message}")]
    UnexpectedError {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn from_submit(err: SubmitError, messages: &Messages) -> Self {
        match err {
            SubmitError::InvalidInput(e) => Self::ValidationError {
                message: messages.invalid,
                errors: e.into_errors(),
            },
            SubmitError::DuplicateSubscription => Self::Rejected(DUPLICATE_SUBSCRIPTION),
            SubmitError::PersistenceError(source) => Self::UnexpectedError {
                message: messages.failure,
                source,
            },
        }
    }

    /// The body could not be read as the expected JSON object at all.
    pub fn from_rejection(rejection: JsonRejection, messages: &Messages) -> Self {
        Self::ValidationError {
            message: messages.invalid,
            errors: vec![FieldError::new("body", rejection.body_text())],
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } | Self::Rejected(_) => StatusCode::BAD_REQUEST,
            Self::UnexpectedError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            Self::ValidationError { message, errors } => {
                tracing::warn!(?errors, "{}", message);
                schema::Error {
                    success: false,
                    message: message.to_owned(),
                    errors: Some(
                        errors
                            .into_iter()
                            .map(|e| schema::ErrorDetails {
                                field: e.field,
                                message: e.message,
                            })
                            .collect(),
                    ),
                }
            }
            Self::Rejected(message) => {
                tracing::info!("{}", message);
                schema::Error {
                    success: false,
                    message: message.to_owned(),
                    errors: None,
                }
            }
            Self::UnexpectedError { message, source } => {
                tracing::error!("{}: {:?}", message, source);
                schema::Error {
                    success: false,
                    message: message.to_owned(),
                    errors: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

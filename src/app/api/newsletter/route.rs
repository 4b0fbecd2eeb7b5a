use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::app::{
    error::{AppError, AppResult, Messages},
    schema::Acknowledgement,
    AppState,
};
use crate::domain::NewsletterForm;

const MESSAGES: Messages = Messages {
    invalid: "Invalid email",
    failure: "Failed to subscribe to newsletter",
};

#[tracing::instrument(name = "subscribing to the newsletter", skip(state, body))]
pub async fn subscribe(
    State(state): State<AppState>,
    body: Result<Json<NewsletterForm>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Acknowledgement>)> {
    let Json(form) = body.map_err(|e| AppError::from_rejection(e, &MESSAGES))?;

    state
        .submissions
        .submit_newsletter(form)
        .await
        .map_err(|e| AppError::from_submit(e, &MESSAGES))?;

    Ok((
        StatusCode::CREATED,
        Json(Acknowledgement::new("Newsletter subscription successful")),
    ))
}

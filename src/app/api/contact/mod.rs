use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::instrument;

use crate::app::{
    error::{AppError, AppResult, Messages},
    schema::Acknowledgement,
    AppState,
};
use crate::domain::ContactForm;

const MESSAGES: Messages = Messages {
    invalid: "Invalid form data",
    failure: "Failed to submit contact form",
};

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

#[instrument(name = "submitting a contact form", skip(state, body))]
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Result<Json<ContactForm>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Acknowledgement>)> {
    let Json(form) = body.map_err(|e| AppError::from_rejection(e, &MESSAGES))?;

    state
        .submissions
        .submit_contact(form)
        .await
        .map_err(|e| AppError::from_submit(e, &MESSAGES))?;

    Ok((
        StatusCode::CREATED,
        Json(Acknowledgement::new("Contact form submission successful")),
    ))
}

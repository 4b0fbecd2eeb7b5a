use axum::Router;

use super::AppState;

mod contact;
mod health;
mod newsletter;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/api", contact::router().merge(newsletter::router()))
        .merge(health::router())
}

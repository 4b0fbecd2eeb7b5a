use axum::{routing::post, Router};

use crate::app::AppState;

pub mod route;

pub fn router() -> Router<AppState> {
    Router::new().route("/newsletter", post(route::subscribe))
}

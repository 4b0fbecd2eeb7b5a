use std::{io, net::SocketAddr, sync::Arc};

use axum::{http::Request, middleware, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{config::Settings, service::SubmissionService, store::SubmissionStore};

mod api;
mod error;
mod logging;
mod schema;

#[derive(Clone)]
pub struct AppState {
    submissions: SubmissionService,
}

fn app_router() -> Router<AppState> {
    api::router()
}

pub struct App {
    listener: TcpListener,
    addr: SocketAddr,
}

impl App {
    pub async fn with(config: &Settings) -> Result<Self, io::Error> {
        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await?;
        let addr = listener.local_addr()?;

        Ok(Self { listener, addr })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub async fn serve(self, store: Arc<dyn SubmissionStore>) -> Result<(), io::Error> {
        let app = app_router()
            .with_state(AppState {
                submissions: SubmissionService::new(store),
            })
            .layer(middleware::from_fn(logging::log_api_response))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                    let id = uuid::Uuid::new_v4();
                    tracing::info_span!(
                        "request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        %id,
                    )
                }),
            );

        axum::serve(self.listener, app.into_make_service()).await
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use foundation::{
    app::App,
    config::get_configuration,
    domain::{ContactSubmission, Email, NewsletterSubscription},
    store::{InMemoryStore, PostgresStore, StoreError, SubmissionStore},
    telemetry::get_subscriber,
};
use once_cell::sync::Lazy;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter = "foundation=trace,tower_http=trace,axum::rejection=trace";

    if std::env::var("TEST_LOG").is_ok() {
        get_subscriber(env_filter, std::io::stdout).init();
    } else {
        get_subscriber(env_filter, std::io::sink).init();
    };
});

pub struct TestApp {
    pub addr: String,
    pub store: Arc<InMemoryStore>,
}

impl TestApp {
    pub async fn post_contact(&self, body: &str) -> reqwest::Response {
        self.post_json("/api/contact", body).await
    }

    pub async fn post_newsletter(&self, body: &str) -> reqwest::Response {
        self.post_json("/api/newsletter", body).await
    }

    async fn post_json(&self, path: &str, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{}", &self.addr, path))
            .json(&serde_json::from_str::<Value>(body).unwrap())
            .send()
            .await
            .expect("The request should succeed.")
    }

    pub async fn post_raw(&self, path: &str, body: &'static str) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}{}", &self.addr, path))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("The request should succeed.")
    }
}

pub async fn spawn_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let addr = spawn_with_store(store.clone()).await;

    TestApp { addr, store }
}

/// Spawn the app on a store whose every operation fails.
pub async fn spawn_app_with_broken_store() -> String {
    spawn_with_store(Arc::new(BrokenStore)).await
}

async fn spawn_with_store(store: Arc<dyn SubmissionStore>) -> String {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;

    let app = App::with(&config)
        .await
        .expect("The listener should be able to bind the address.");
    let addr = format!("http://127.0.0.1:{}", app.port());

    let _ = tokio::spawn(async move {
        app.serve(store)
            .await
            .expect("The server should be running")
    });

    addr
}

struct BrokenStore;

#[async_trait]
impl SubmissionStore for BrokenStore {
    async fn add_contact_submission(&self, _: ContactSubmission) -> Result<(), StoreError> {
        Err(anyhow::anyhow!("the database is on fire").into())
    }

    async fn add_newsletter_subscription(
        &self,
        _: NewsletterSubscription,
    ) -> Result<(), StoreError> {
        Err(anyhow::anyhow!("the database is on fire").into())
    }

    async fn find_newsletter_subscription_by_email(
        &self,
        _: &Email,
    ) -> Result<Option<NewsletterSubscription>, StoreError> {
        Err(anyhow::anyhow!("the database is on fire").into())
    }
}

/// Create a fresh database named after a random UUID and apply the migrations.
pub async fn configure_database() -> PgPool {
    Lazy::force(&TRACING);

    let mut config = get_configuration().expect("Failed to read configuration.");
    config.database.database_name = Uuid::new_v4().to_string();

    let mut connection = PgConnection::connect_with(&config.database.without_db())
        .await
        .expect("A postgres connection should be created.");

    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database.database_name).as_str())
        .await
        .expect("The database should be created.");

    let connection_pool = PgPool::connect_with(config.database.with_db())
        .await
        .expect("A postgres connection pool should be created.");

    PostgresStore::new(connection_pool.clone())
        .migrate()
        .await
        .expect("The migrations should run without error.");

    connection_pool
}

pub fn get_client() -> ClientWithMiddleware {
    let retry_policy = ExponentialBackoff::builder().build_with_max_retries(3);

    ClientBuilder::new(reqwest::Client::new())
        .with(TracingMiddleware::default())
        .with(RetryTransientMiddleware::new_with_policy(retry_policy))
        .build()
}

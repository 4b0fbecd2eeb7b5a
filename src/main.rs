use anyhow::Context;
use foundation::{
    app::App, config::get_configuration, store::build_store, telemetry::get_subscriber,
};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let store = build_store(&config)
        .await
        .context("Could not set up the submission store")?;

    let app = App::with(&config)
        .await
        .context("Could not bind the listener")?;

    tracing::info!(
        addr = %app.addr(),
        backend = ?config.storage.backend,
        "starting server"
    );
    app.serve(store).await.context("The server stopped unexpectedly")?;

    Ok(())
}

use anyhow::Context;

use inventory_api::app;
use inventory_api::repositories;
use inventory_api::utils::config::{DatabaseConfig, ServerConfig};
use inventory_api::utils::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    logging::init_logging();

    let server = ServerConfig::from_env()?;
    let database = DatabaseConfig::from_env()?;

    let items = repositories::connect(&database).context("failed to open item store")?;
    items
        .init_schema()
        .context("failed to initialise items table")?;
    tracing::info!("items table ready");

    let app = app::build_app(items, &server.allowed_origins);

    let listener = tokio::net::TcpListener::bind(server.addr)
        .await
        .with_context(|| format!("bind {} failed", server.addr))?;
    tracing::info!("Axum listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}

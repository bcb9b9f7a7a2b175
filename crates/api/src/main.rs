use std::sync::Arc;

use anyhow::Context;

use climastore_infra::StoreConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StoreConfig::from_env().context("failed to load configuration")?;
    climastore_observability::init_with_default(&config.log_filter);

    let services = climastore_api::app::services::build_services(&config)?;
    let app = climastore_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

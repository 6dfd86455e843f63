mod routes;

use anyhow::Context;
use relay_app::{AppContext, RelayConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    if let Err(e) = dotenv {
        tracing::warn!("No .env file loaded: {}", e);
    }

    let config = RelayConfig::from_env();
    let app_context = AppContext::from_config(&config);
    let app = routes::router(app_context, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind address {}", addr))?;

    tracing::info!(
        "Listening on http://{}",
        listener.local_addr().context("failed to get local address")?
    );
    tracing::info!("Serving static files from {}", config.static_dir.display());

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobboard::{api::create_app, application::builder::ApplicationBuilder, Config};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(config.log_json);

    info!("Starting jobboard service");

    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;
    info!(environment = %config.environment, "Configuration loaded and validated");

    let state = ApplicationBuilder::new(config.clone())
        .with_database()
        .await
        .map_err(|e| anyhow::anyhow!(e))
        .context("Database initialization failed")?
        .with_infrastructure()
        .map_err(|e| anyhow::anyhow!(e))?
        .build()
        .map_err(|e| anyhow::anyhow!(e))?;

    let app = create_app(state, &config);

    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

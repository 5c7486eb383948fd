use anyhow::Context;
use newspulse::app_state::AppState;
use newspulse::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("newspulse=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = AppState::new(&config);
    let app = newspulse::app(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

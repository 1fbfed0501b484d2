mod assets;
mod config;
mod http;

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::info;
use tracing_subscriber::EnvFilter;

use self::{
  config::{Config, LogFormat},
  http::AppState,
};

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
  let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
  match format {
    LogFormat::Text => subscriber.init(),
    LogFormat::Json => subscriber.json().init(),
  }
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    tracing::error!(%err, "Failed to listen for Ctrl-C");
    std::future::pending::<()>().await;
  }
  info!("Shutting down");
}

pub async fn serve() -> Result<()> {
  let config = Config::from_env()?;
  init_tracing(config.log_format);
  let metrics = if config.metrics {
    Some(
      PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?,
    )
  } else {
    None
  };
  let app = http::app(AppState { metrics });
  info!(addr = %config.listen_addr, "TokenHub listening");
  axum::Server::try_bind(&config.listen_addr)
    .with_context(|| format!("Failed to bind {}", config.listen_addr))?
    .serve(app.into_make_service())
    .with_graceful_shutdown(shutdown_signal())
    .await?;
  Ok(())
}

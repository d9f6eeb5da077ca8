use crate::areas::comparison::Comparison;
use anyhow::Context;
use axum::Router;
use colored::Colorize;
use derive_new::new;
use std::future::Future;
use std::io::Write;
use std::path::Path;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5240;

/// Where the report viewer listens.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig::new(DEFAULT_HOST.to_string(), DEFAULT_PORT)
    }
}

impl ServerConfig {
    pub fn url_for(&self, file_name: &str) -> String {
        format!("http://{}:{}/{}", self.host, self.port, file_name)
    }
}

impl Comparison {
    /// Serves the finished report until Ctrl-C.
    pub async fn serve(&self, config: &ServerConfig) -> anyhow::Result<()> {
        let listener = TcpListener::bind((config.host.as_str(), config.port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

        tracing::info!("Serving the report of {}", self.request().caption());

        let url = config.url_for(self.report().file_name());
        writeln!(
            self.writer(),
            "{} Please visit {} to see diff file (Press Ctrl-C to stop)",
            "Compare finished.".green().bold(),
            url.cyan().underline()
        )?;
        self.writer().flush()?;

        serve_dir(listener, self.report().dir(), shutdown_signal()).await
    }
}

/// Router exposing the files under `dir` and nothing else.
pub fn router(dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(TraceLayer::new_for_http())
}

/// Serves `dir` on an already bound listener until `shutdown` resolves.
pub async fn serve_dir(
    listener: TcpListener,
    dir: &Path,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    tracing::debug!(
        "Serving {} on {}",
        dir.display(),
        listener.local_addr()?
    );

    axum::serve(listener, router(dir))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Report server failed")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", err);
        return;
    }
    tracing::info!("Stopping report server");
}

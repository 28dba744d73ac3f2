use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use errandmate_shared::MockDataSource;
use tracing_subscriber::EnvFilter;

mod routes;

/// Development host for the ErrandMate frontend.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Config {
    /// Address to listen on.
    #[arg(long, env = "ERRANDMATE_BIND", default_value = "0.0.0.0:3000")]
    bind: SocketAddr,

    /// Directory holding index.html, the wasm-pack output in pkg/ and assets/.
    #[arg(long, env = "ERRANDMATE_DIST", default_value = "frontend")]
    dist: PathBuf,

    /// Emit logs as JSON lines.
    #[arg(long, env = "ERRANDMATE_LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.log_json);

    let state = routes::AppState {
        source: Arc::new(MockDataSource::default()),
        dist: config.dist.clone(),
    };
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(addr = %config.bind, dist = %config.dist.display(), "server running");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

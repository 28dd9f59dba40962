use std::sync::Arc;

use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use discern_inference::{Engine, EngineConfig};
use discern_server::config::ServerConfig;
use discern_server::{AppState, router};
use discern_session::{MemorySessionStore, SessionStore};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let engine_config = match &config.engine_config {
        Some(path) => EngineConfig::load(path)
            .wrap_err_with(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = Engine::new(engine_config)?;

    let ttl = jiff::SignedDuration::try_from(config.session_ttl)?;
    let sessions: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new(ttl));
    tokio::spawn(sweep_sessions(Arc::clone(&sessions), config.sweep_interval));

    let app = router(AppState::new(sessions, engine));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        session_ttl_secs = config.session_ttl.as_secs(),
        "listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Purge expired sessions on a fixed interval for the life of the process.
async fn sweep_sessions(sessions: Arc<dyn SessionStore>, every: std::time::Duration) {
    let mut ticker = tokio::time::interval(every);
    // The first tick completes immediately.
    ticker.tick().await;
    loop {
        ticker.tick().await;
        let purged = sessions.purge_expired();
        tracing::debug!(purged, live = sessions.len(), "session sweep");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

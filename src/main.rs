mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod logging;
mod routes;

use anyhow::{Context, Result};
use tracing::info;

use crate::app_state::{build_app_state, open_log_repository};
use crate::config::AppConfig;
use crate::domain::log::service::log_seed_service::seed_if_empty;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    let _log_guard = logging::init_tracing(config.log_dir.as_deref());

    info!(
        data_dir = %config.data_dir.display(),
        "Starting logdash-core v{}",
        env!("CARGO_PKG_VERSION")
    );

    let repo = open_log_repository(&config)?;

    if config.seed_on_empty {
        let inserted = seed_if_empty(repo.as_ref(), config.seed_count, config.seed_reset).await?;
        if inserted > 0 {
            info!(inserted, "Seeded sample logs");
        }
    }

    let state = build_app_state(&config, repo);
    let app = routes::app_router().with_state(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Server running at http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}

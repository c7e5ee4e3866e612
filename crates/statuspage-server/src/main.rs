//! Status server binary.
//!
//! - Snapshot of CI metadata captured once at startup
//! - `/` dashboard, `/health`, `/info`
//! - Binds `FLASK_RUN_HOST:FLASK_RUN_PORT`, stops cleanly on Ctrl-C / SIGTERM

use tracing_subscriber::{fmt, EnvFilter};

use statuspage_core::error::Result;
use statuspage_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, code = e.client_code().as_str(), "statuspage-server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cfg = config::load_from_env()?;
    let (host, port) = cfg.server.bind_target();

    let state = app_state::AppState::new(cfg);
    {
        let snap = state.snapshot();
        tracing::info!(
            build_version = %snap.build().build_version,
            commit = %snap.short_sha(),
            hostname = %snap.hostname(),
            deployed_at = %snap.deployed_at(),
            environment = %state.environment(),
            "deployment snapshot captured"
        );
    }
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    tracing::info!(listen = %listener.local_addr()?, "statuspage-server starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("statuspage-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
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
                tracing::warn!(error = %e, "failed to listen for SIGTERM");
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
    tracing::info!("shutdown signal received, draining connections");
}

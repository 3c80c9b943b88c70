//! HTTP server setup and management

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::server::handlers::{AppState, current, health, root, update, wakeup};
use crate::server::state::StateService;

/// Routes of the record API; any origin may call them
pub fn router(service: Arc<StateService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/current", get(current))
        .route("/update", post(update))
        .route("/health", get(health))
        .route("/wakeup", get(wakeup))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(AppState::new(service))
}

/// Serve `service` on `listen_addr` until ctrl-c or SIGTERM
pub async fn start(listen_addr: &str, service: Arc<StateService>) -> crate::Result<()> {
    let app = router(service);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    tracing::info!("SOTD API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("SOTD API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}

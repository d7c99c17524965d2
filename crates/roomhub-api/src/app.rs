//! Application builder: wires router, middleware and state into an Axum app,
//! and runs it until a shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use roomhub_core::config::{AppConfig, StoreBackend};
use roomhub_core::error::AppError;
use roomhub_database::{DatabasePool, MemoryBookingStore, PgBookingStore, migration};

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let timeout = request_timeout_layer(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    build_router(state)
        .layer(timeout)
        .layer(build_compression_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Requests running longer than `seconds` are answered with 408.
pub fn request_timeout_layer(seconds: u64) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(seconds))
}

/// Runs the RoomHub server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RoomHub server (store: {})...", config.store.backend);

    let mut db_pool = None;
    let state = match config.store.backend {
        StoreBackend::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?;
            if !pool.health_check().await? {
                return Err(AppError::infrastructure("Database did not answer health check"));
            }
            if config.database.run_migrations {
                migration::run_migrations(pool.pool()).await?;
            }
            let store = Arc::new(PgBookingStore::new(pool.pool().clone()));
            db_pool = Some(pool);
            AppState::new(config.clone(), store.clone(), store)
        }
        StoreBackend::Memory => {
            tracing::warn!("Using the in-memory store; it starts without sessions and is lost on restart");
            let store = Arc::new(MemoryBookingStore::new());
            AppState::new(config.clone(), store.clone(), store)
        }
    };

    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("RoomHub server listening on {}", addr);

    let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signal_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let result = tokio::select! {
        result = &mut server => result,
        _ = signal_rx => {
            tracing::info!("Shutdown signal received, draining for up to {}s", grace.as_secs());
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => result,
                Err(_) => {
                    tracing::warn!("Graceful shutdown timed out; dropping open connections");
                    Ok(())
                }
            }
        }
    };

    if let Some(pool) = db_pool {
        pool.close().await;
    }

    result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
    tracing::info!("RoomHub server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
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
                tracing::error!("Failed to install SIGTERM handler: {e}");
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
}

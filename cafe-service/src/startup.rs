//! Application startup and lifecycle management.

use service_core::error::AppError;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::config::{CafeConfig, StoreBackend, StoreConfig};
use crate::services::{CafeStore, InMemoryStore, MongoStore};
use crate::{build_router, AppState};

/// Open the configured store. Called once per process.
pub async fn connect_store(config: &StoreConfig) -> Result<Arc<dyn CafeStore>, AppError> {
    match config.backend {
        StoreBackend::MongoDb => {
            let uri = config.mongo_url.as_deref().ok_or_else(|| {
                AppError::ConfigError(anyhow::anyhow!("MONGO_URL is required but not set"))
            })?;
            let store = MongoStore::connect(uri, &config.db_name).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data will not survive a restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
    }
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: CafeConfig) -> Result<Self, AppError> {
        let store = connect_store(&config.store).await.map_err(|e| {
            tracing::error!("Failed to open store: {}", e);
            e
        })?;

        Self::build_with_store(config, store).await
    }

    /// Build around an already-open store.
    pub async fn build_with_store(
        config: CafeConfig,
        store: Arc<dyn CafeStore>,
    ) -> Result<Self, AppError> {
        // Port 0 picks a random port (tests)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Cafe service listening");

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, store),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Serve until SIGINT or SIGTERM.
    pub async fn run_until_stopped(self) -> Result<(), AppError> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, then close the store.
    pub async fn run_with_shutdown<F>(self, signal: F) -> Result<(), AppError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let store = self.state.store.clone();
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                AppError::from(e)
            })?;

        store.close().await;
        tracing::info!("Service shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received SIGINT, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        },
    }
}

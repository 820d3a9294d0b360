//! User Service Library
//!
//! Stores users behind an HTTP API, keeps emails unique and announces
//! creations and deletions through a notifier.

pub mod api;
pub mod config;
pub mod infra;
pub mod notifier;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::config::UserServiceConfig;
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};
use crate::service::UserManager;

/// Run the HTTP server until Ctrl+C.
pub async fn serve(config: UserServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(?config, "Starting user service");

    let db = Database::connect(&config.database).await?;
    let user_repo = Arc::new(UserStore::new(db.get_connection()));
    let notifier = notifier::from_config(&config.notifier).await;
    let user_service = Arc::new(UserManager::new(user_repo, notifier));

    let app = create_router(AppState::new(user_service, db));

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    info!("User service listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("User service stopped");
    Ok(())
}

/// Remove every stored user. Returns the number of deleted rows.
pub async fn purge(config: UserServiceConfig) -> Result<u64, Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database).await?;
    let deleted = UserStore::new(db.get_connection()).delete_all().await?;

    info!(count = deleted, "Users purged");
    Ok(deleted)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Received shutdown signal, stopping server...");
}

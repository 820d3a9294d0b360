//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use common::DatabaseConfig;
use domain::UserEvent;
use user_service_lib::api::{create_router, AppState};
use user_service_lib::infra::Database;
use user_service_lib::notifier::Notifier;
use user_service_lib::repository::UserStore;
use user_service_lib::service::UserManager;

/// Fresh in-memory SQLite database with the `users` table in place.
///
/// A single pooled connection keeps every query on the same in-memory file.
pub async fn test_database() -> Database {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };

    Database::connect(&config)
        .await
        .expect("in-memory database should open")
}

/// Notifier that keeps every event for later inspection.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<UserEvent>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<UserEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, event: UserEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Service wired to a real store and a recording notifier.
pub async fn test_service() -> (UserManager, Arc<RecordingNotifier>, Database) {
    let db = test_database().await;
    let notifier = Arc::new(RecordingNotifier::default());
    let service = UserManager::new(
        Arc::new(UserStore::new(db.get_connection())),
        notifier.clone(),
    );

    (service, notifier, db)
}

/// Full HTTP router over a fresh database.
pub async fn test_app() -> (axum::Router, Arc<RecordingNotifier>) {
    let (service, notifier, db) = test_service().await;
    let app = create_router(AppState::new(Arc::new(service), db));

    (app, notifier)
}

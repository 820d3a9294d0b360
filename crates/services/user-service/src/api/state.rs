//! Application state for dependency injection.

use std::sync::Arc;

use crate::infra::Database;
use crate::service::UserService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database handle, used for health checks
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(user_service: Arc<dyn UserService>, database: Database) -> Self {
        Self {
            user_service,
            database,
        }
    }
}

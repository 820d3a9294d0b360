//! Service layer - business rules for user management.

mod user_service;

pub use user_service::{UserManager, UserService};

//! User service - Handles user-related business logic.
//!
//! Every operation reads current state from the repository before acting;
//! nothing is cached between calls.

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{NewUser, User, UserEvent, UserPatch, CREATED_AT_PRECISION};

use crate::notifier::Notifier;
use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user; fails with `Conflict` when the email is taken
    async fn create_user(&self, new_user: NewUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// Apply a partial update. Does not emit an event.
    async fn update_user(&self, id: i64, patch: UserPatch) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository and notifier.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    notifier: Arc<dyn Notifier>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repo: Arc<dyn UserRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }

    /// Fail with `Conflict` if another user owns `email`.
    ///
    /// A match whose id equals `owner` is the user itself and is allowed.
    async fn ensure_email_available(&self, email: &str, owner: Option<i64>) -> AppResult<()> {
        match self.repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict("Email")),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, new_user: NewUser) -> AppResult<User> {
        self.ensure_email_available(&new_user.email, None).await?;

        let created_at = Utc::now().trunc_subsecs(CREATED_AT_PRECISION);
        let user = self.repo.create(new_user, created_at).await?;

        self.notifier.notify(UserEvent::created(&user.email)).await;
        Ok(user)
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> AppResult<User> {
        let mut user = self.repo.find_by_id(id).await?.ok_or_not_found()?;

        if let Some(email) = patch.email.as_deref() {
            if !user.has_email(email) {
                self.ensure_email_available(email, Some(id)).await?;
            }
        }

        user.apply(patch);
        self.repo.update(&user).await
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        let user = self.repo.find_by_id(id).await?.ok_or_not_found()?;
        self.repo.delete(id).await?;

        self.notifier.notify(UserEvent::deleted(user.email)).await;
        Ok(())
    }
}

//! User repository implementation backed by SeaORM.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, ColumnTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::{AppError, AppResult};
use domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Saving is split in two: `create` inserts a record without an id and lets
/// the store assign one, `update` overwrites the mutable fields of an
/// existing record. Every mutation runs as a single statement.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user; the store assigns the id
    async fn create(&self, user: NewUser, created_at: DateTime<Utc>) -> AppResult<User>;

    /// Overwrite name, email and age of an existing user
    async fn update(&self, user: &User) -> AppResult<User>;

    /// Delete user by ID (no-op when absent)
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Delete every user, returning how many rows were removed
    async fn delete_all(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.is_none() {
            tracing::debug!(user_id = id, "No user found");
        }

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: NewUser, created_at: DateTime<Utc>) -> AppResult<User> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            age: Set(user.age),
            created_at: Set(created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(write_error)?;
        tracing::info!(user_id = model.id, "User added");

        Ok(User::from(model))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        // created_at stays NotSet so it is never part of the UPDATE
        let active_model = ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            age: Set(user.age),
            created_at: NotSet,
        };

        let model = active_model.update(&self.db).await.map_err(write_error)?;
        tracing::info!(user_id = model.id, "User updated");

        Ok(User::from(model))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(user_id = id, "No user to delete");
        } else {
            tracing::info!(user_id = id, "User deleted");
        }

        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = UserEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::info!(count = result.rows_affected, "All users deleted");
        Ok(result.rows_affected)
    }
}

/// Translate write failures into domain errors.
///
/// A unique violation on `email` means a concurrent writer won the race past
/// the service pre-check. A missing row on update means the user was deleted
/// in between.
fn write_error(err: DbErr) -> AppError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::warn!(%detail, "Unique constraint rejected user write");
        return AppError::conflict("Email");
    }

    match err {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
        other => AppError::Database(other),
    }
}

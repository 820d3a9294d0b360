//! Database connection and initialization.

use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Schema,
    Statement,
};

use common::DatabaseConfig;

use crate::repository::entities::user::Entity as UserEntity;

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the connection pool and make sure the `users` table exists.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        let db = Self { connection };

        db.ensure_schema().await?;
        tracing::info!("Database connected and schema ready");

        Ok(db)
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Create the `users` table from the entity definition if it is missing.
    ///
    /// The table carries a `UNIQUE` constraint on `email`, which backs the
    /// service-level uniqueness check against concurrent writers.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        let mut table = Schema::new(backend).create_table_from_entity(UserEntity);
        table.if_not_exists();

        self.connection.execute(backend.build(&table)).await?;
        Ok(())
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

//! User service configuration.

use std::env;

use common::{DatabaseConfig, NotifierConfig};

/// User service configuration.
#[derive(Clone)]
pub struct UserServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Event notification settings
    pub notifier: NotifierConfig,
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
}

impl std::fmt::Debug for UserServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.database.max_connections)
            .field("min_connections", &self.database.min_connections)
            .field(
                "redis_url",
                &self.notifier.redis_url.as_ref().map(|_| "[REDACTED]"),
            )
            .field("events_channel", &self.notifier.channel)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database: DatabaseConfig {
                url: env::var("USER_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
            notifier: NotifierConfig {
                redis_url: env::var("USER_SERVICE_REDIS_URL")
                    .or_else(|_| env::var("REDIS_URL"))
                    .ok()
                    .filter(|url| !url.trim().is_empty()),
                channel: env::var("USER_EVENTS_CHANNEL").unwrap_or(defaults.notifier.channel),
            },
            host: env::var("USER_SERVICE_HOST").unwrap_or(defaults.host),
            port: env::var("USER_SERVICE_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            notifier: NotifierConfig::default(),
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_log_events_instead_of_publishing() {
        let config = UserServiceConfig::default();

        assert!(config.notifier.redis_url.is_none());
        assert_eq!(config.notifier.channel, "user-events");
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn debug_output_redacts_urls() {
        let mut config = UserServiceConfig::default();
        config.notifier.redis_url = Some("redis://secret@localhost".to_string());

        let printed = format!("{:?}", config);
        assert!(!printed.contains("password"));
        assert!(!printed.contains("secret"));
    }
}

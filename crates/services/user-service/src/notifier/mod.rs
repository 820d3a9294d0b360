//! Event notification for user lifecycle changes.
//!
//! Notifications are best effort: the store mutation has already committed
//! when `notify` runs, and a lost event is tolerated.

mod log_notifier;
mod redis_notifier;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use common::NotifierConfig;
use domain::UserEvent;

pub use log_notifier::LogNotifier;
pub use redis_notifier::RedisNotifier;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Fire-and-forget dispatch of user events.
///
/// Implementations must not fail the caller: delivery errors are logged and
/// swallowed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Dispatch a user event
    async fn notify(&self, event: UserEvent);
}

/// Upper bound on the initial broker connection attempt
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the notifier described by the config: Redis when a URL is set and
/// reachable, log-only otherwise. Never fails.
pub async fn from_config(config: &NotifierConfig) -> Arc<dyn Notifier> {
    let Some(url) = config.redis_url.as_deref() else {
        tracing::warn!("Redis URL not configured - user events will only be logged");
        return Arc::new(LogNotifier);
    };

    match timeout(CONNECT_TIMEOUT, RedisNotifier::connect(url, config.channel.clone())).await {
        Ok(Ok(notifier)) => Arc::new(notifier),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Redis unavailable - user events will only be logged");
            Arc::new(LogNotifier)
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = CONNECT_TIMEOUT.as_secs(),
                "Redis connection timed out - user events will only be logged"
            );
            Arc::new(LogNotifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_redis_url_falls_back_to_logging() {
        let config = NotifierConfig::default();
        let notifier = from_config(&config).await;

        // Must complete without a broker
        notifier.notify(UserEvent::created("john@example.com")).await;
    }

    #[tokio::test]
    async fn invalid_redis_url_falls_back_to_logging() {
        let config = NotifierConfig {
            redis_url: Some("not a url".to_string()),
            ..NotifierConfig::default()
        };

        let notifier = from_config(&config).await;
        notifier.notify(UserEvent::deleted("john@example.com")).await;
    }

    #[tokio::test]
    async fn unreachable_redis_falls_back_within_timeout() {
        let config = NotifierConfig {
            redis_url: Some("redis://127.0.0.1:1".to_string()),
            ..NotifierConfig::default()
        };

        let notifier = timeout(CONNECT_TIMEOUT + Duration::from_secs(5), from_config(&config))
            .await
            .expect("startup must not hang on an unreachable broker");
        notifier.notify(UserEvent::created("john@example.com")).await;
    }
}

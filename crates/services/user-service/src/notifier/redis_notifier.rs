//! Redis pub/sub notifier.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};

use domain::UserEvent;

use super::Notifier;

/// Publishes user events as JSON on a Redis channel.
#[derive(Clone)]
pub struct RedisNotifier {
    connection: ConnectionManager,
    channel: String,
}

impl RedisNotifier {
    /// Connect to Redis.
    pub async fn connect(redis_url: &str, channel: impl Into<String>) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        let channel = channel.into();

        tracing::info!(%channel, "Redis notifier connected");

        Ok(Self {
            connection,
            channel,
        })
    }
}

#[async_trait]
impl Notifier for RedisNotifier {
    async fn notify(&self, event: UserEvent) {
        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize user event");
                return;
            }
        };

        let mut connection = self.connection.clone();
        let channel = self.channel.clone();

        // The request path never waits on the broker
        tokio::spawn(async move {
            let result: Result<i64, RedisError> =
                connection.publish(channel.as_str(), payload).await;

            match result {
                Ok(receivers) => tracing::debug!(
                    operation = %event.operation,
                    %channel,
                    receivers,
                    "User event published"
                ),
                Err(e) => tracing::warn!(
                    operation = %event.operation,
                    email = %event.email,
                    error = %e,
                    "Failed to publish user event"
                ),
            }
        });
    }
}

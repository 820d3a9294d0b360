//! Notifier that only writes events to the log.

use async_trait::async_trait;

use domain::UserEvent;

use super::Notifier;

/// Used when no event broker is configured.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, event: UserEvent) {
        tracing::info!(
            operation = %event.operation,
            email = %event.email,
            "User event (not published)"
        );
    }
}

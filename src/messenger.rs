//! Outbound delivery
//!
//! The router only ever produces [`OutboundMessage`]s. How they reach the
//! user is up to the [`Messenger`] implementation (Telegram in production,
//! a recorder in tests). Delivery is fire-and-forget: failures are logged and
//! never retried.

use async_trait::async_trait;

use crate::types::OutboundMessage;

/// Result type for delivery
pub type MessengerResult<T> = Result<T, MessengerError>;

#[derive(Debug, thiserror::Error)]
pub enum MessengerError {
    #[error("telegram API error: {0}")]
    Telegram(String),
}

/// Sink for outbound messages
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> MessengerResult<()>;
}

/// Send a message and swallow any failure after logging it
pub async fn deliver(messenger: &dyn Messenger, message: OutboundMessage) {
    let chat_id = message.chat_id();
    if let Err(e) = messenger.send(message).await {
        tracing::error!("Failed to send the response to chat {}: {}", chat_id, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingMessenger {
        attempts: AtomicUsize,
    }

    #[async_trait]
    impl Messenger for FailingMessenger {
        async fn send(&self, _message: OutboundMessage) -> MessengerResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(MessengerError::Telegram("Forbidden: bot was blocked".to_string()))
        }
    }

    #[tokio::test]
    async fn test_deliver_swallows_errors_without_retry() {
        let messenger = FailingMessenger {
            attempts: AtomicUsize::new(0),
        };
        deliver(&messenger, OutboundMessage::text(1, "hello")).await;
        assert_eq!(messenger.attempts.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_error_display() {
        let err = MessengerError::Telegram("rate limited".to_string());
        assert_eq!(err.to_string(), "telegram API error: rate limited");
    }
}

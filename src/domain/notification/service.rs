use super::error::NotificationServiceError;
use super::format::format_entry_message;
use crate::domain::miniflux::{Entry, Feed};
use crate::infrastructure::feishu::MessageSender;
use async_trait::async_trait;
use std::sync::Arc;

pub struct NotificationService {
    sender: Arc<dyn MessageSender>,
}

impl NotificationService {
    pub fn new(sender: Arc<dyn MessageSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
pub trait NotificationServiceApi: Send + Sync {
    /// Render one entry and deliver it to `webhook_url`
    ///
    /// Exactly one delivery attempt is made; the outcome is returned as-is.
    async fn send_entry(
        &self,
        entry: &Entry,
        feed: &Feed,
        webhook_url: &str,
    ) -> Result<(), NotificationServiceError>;
}

#[async_trait]
impl NotificationServiceApi for NotificationService {
    async fn send_entry(
        &self,
        entry: &Entry,
        feed: &Feed,
        webhook_url: &str,
    ) -> Result<(), NotificationServiceError> {
        let message = format_entry_message(entry, feed);
        tracing::debug!(entry_id = entry.id, title = %message.title(), "Formatted entry");

        self.sender.send(&message, webhook_url).await?;

        Ok(())
    }
}

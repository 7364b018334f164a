use super::FeishuClientError;
use crate::domain::notification::FeishuMessage;
use async_trait::async_trait;

/// Outbound delivery of a rendered message to a chat webhook.
///
/// Implementations make a single attempt per call. Retrying, queueing and
/// backoff are deliberately absent; callers decide what a failure means.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// POST `message` to `webhook_url`
    ///
    /// # Errors
    /// Returns error on transport failure or when the endpoint answers
    /// with anything other than 200 OK
    async fn send(&self, message: &FeishuMessage, webhook_url: &str)
        -> Result<(), FeishuClientError>;
}

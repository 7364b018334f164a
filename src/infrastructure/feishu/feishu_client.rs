use super::message_sender::MessageSender;
use crate::domain::notification::FeishuMessage;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

pub const USER_AGENT: &str = "miniflux-feishu/1.0.0";

#[derive(Debug, thiserror::Error)]
pub enum FeishuClientError {
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("failed to marshal message: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to send request: {0}")]
    Request(#[source] reqwest::Error),
    #[error("feishu API returned status {status}: {body}")]
    Status { status: u16, body: String },
}

/// Feishu custom-bot webhook client
pub struct FeishuClient {
    http_client: reqwest::Client,
}

impl FeishuClient {
    pub fn new(timeout: Duration) -> Result<Self, FeishuClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FeishuClientError::Build)?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl MessageSender for FeishuClient {
    async fn send(
        &self,
        message: &FeishuMessage,
        webhook_url: &str,
    ) -> Result<(), FeishuClientError> {
        let payload = serde_json::to_vec(message)?;

        // Webhook URLs embed the bot token, so it is stripped from transport errors.
        let response = self
            .http_client
            .post(webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| FeishuClientError::Request(e.without_url()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FeishuClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

use crate::infrastructure::feishu::FeishuClientError;

#[derive(Debug, thiserror::Error)]
pub enum NotificationServiceError {
    #[error("destination rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<FeishuClientError> for NotificationServiceError {
    fn from(err: FeishuClientError) -> Self {
        match err {
            FeishuClientError::Status { status, body } => {
                NotificationServiceError::Rejected { status, body }
            }
            other => NotificationServiceError::Dependency(other.to_string()),
        }
    }
}

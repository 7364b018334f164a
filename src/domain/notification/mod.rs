pub mod error;
pub mod format;
pub mod model;
pub mod service;

pub use error::NotificationServiceError;
pub use format::{format_entry_message, strip_html, truncate_chars, CONTENT_MAX_CHARS};
pub use model::{FeishuMessage, PostElement};
pub use service::{NotificationService, NotificationServiceApi};

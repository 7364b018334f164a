pub mod feishu_client;
pub mod message_sender;

pub use feishu_client::{FeishuClient, FeishuClientError, USER_AGENT};
pub use message_sender::MessageSender;

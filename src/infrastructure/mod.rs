pub mod config;
pub mod feishu;
pub mod http;

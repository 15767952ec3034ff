use serde::{Deserialize, Serialize};

use crate::support::repo_types::SupportMessage;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub user_id: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<SupportMessage>,
}

#[derive(Debug, Serialize)]
pub struct SentMessageResponse {
    pub success: bool,
    pub message: SupportMessage,
    pub auto_reply: SupportMessage,
}

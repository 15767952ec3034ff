use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::auth::repo_types::{TelegramProfile, User};

/// Request body for `POST /auth`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub telegram_data: TelegramData,
}

/// Payload produced by the Telegram login widget.
#[derive(Debug, Default, Deserialize)]
pub struct TelegramData {
    pub id: Option<i64>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    pub auth_date: Option<i64>,
    pub hash: Option<String>,
    /// Any other signed field; kept so the check string matches what Telegram signed.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TelegramData {
    pub fn profile(&self, telegram_id: i64) -> TelegramProfile {
        TelegramProfile {
            telegram_id,
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            photo_url: self.photo_url.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: User,
}

use std::collections::BTreeMap;

use anyhow::anyhow;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::auth::dto::TelegramData;

type HmacSha256 = Hmac<Sha256>;

impl TelegramData {
    /// `key=value` lines of every signed field except `hash`, sorted by key.
    pub fn data_check_string(&self) -> String {
        let mut fields: BTreeMap<&str, String> = BTreeMap::new();
        if let Some(id) = self.id {
            fields.insert("id", id.to_string());
        }
        if let Some(auth_date) = self.auth_date {
            fields.insert("auth_date", auth_date.to_string());
        }
        for (key, value) in [
            ("username", &self.username),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("photo_url", &self.photo_url),
        ] {
            if let Some(v) = value {
                fields.insert(key, v.clone());
            }
        }
        for (key, value) in &self.extra {
            match value {
                serde_json::Value::Null => {}
                serde_json::Value::String(s) => {
                    fields.insert(key, s.clone());
                }
                other => {
                    fields.insert(key, other.to_string());
                }
            }
        }

        fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Hex HMAC-SHA256 of `data_check_string`, keyed with SHA-256(bot_token).
pub fn sign_check_string(data_check_string: &str, bot_token: &str) -> anyhow::Result<String> {
    let secret_key = Sha256::digest(bot_token.as_bytes());
    let mut mac = HmacSha256::new_from_slice(&secret_key)
        .map_err(|e| anyhow!("hmac key rejected: {}", e))?;
    mac.update(data_check_string.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks the widget signature. A payload without `hash` never verifies.
pub fn verify_telegram_auth(data: &TelegramData, bot_token: &str) -> anyhow::Result<bool> {
    let Some(received) = data.hash.as_deref() else {
        return Ok(false);
    };
    let expected = sign_check_string(&data.data_check_string(), bot_token)?;
    debug!(telegram_id = ?data.id, "telegram signature checked");
    Ok(expected == received)
}

pub fn is_auth_date_stale(auth_date: i64, max_age_secs: i64, now: i64) -> bool {
    now.saturating_sub(auth_date) > max_age_secs
}

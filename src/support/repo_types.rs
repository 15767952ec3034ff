use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Text of the acknowledgement posted after every user message.
pub const AUTO_REPLY: &str = "Спасибо за обращение! Оператор ответит вам в ближайшее время.";

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SupportMessage {
    pub id: i64,
    pub message: String,
    pub is_admin: bool, // true for the system side of the chat
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

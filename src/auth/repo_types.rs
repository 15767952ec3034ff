use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,                    // internal user ID
    pub telegram_id: i64,           // external Telegram ID, unique
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
    pub balance: f64,               // NUMERIC in the table, cast in SQL
}

/// Result of an upsert: the stored row plus whether it was just created.
#[derive(Debug, FromRow)]
pub struct UpsertedUser {
    #[sqlx(flatten)]
    pub user: User,
    pub created: bool,
}

/// Display fields written on every login. Absent values overwrite stored ones.
#[derive(Debug, Clone, Default)]
pub struct TelegramProfile {
    pub telegram_id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub photo_url: Option<String>,
}

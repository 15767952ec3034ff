use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot token used to derive the login widget signing key. `None` disables the check.
    pub bot_token: Option<String>,
    /// Reject signed payloads whose `auth_date` is older than this many seconds.
    pub auth_max_age_secs: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub telegram: TelegramConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let telegram = TelegramConfig {
            bot_token: std::env::var("TELEGRAM_BOT_TOKEN")
                .ok()
                .filter(|v| !v.is_empty()),
            auth_max_age_secs: std::env::var("TELEGRAM_AUTH_MAX_AGE_SECS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok()),
        };
        Ok(Self {
            database_url,
            max_connections,
            telegram,
        })
    }
}

use anyhow::Context;
use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::debug;

use crate::auth::repo_types::{TelegramProfile, User};
use crate::config::AppConfig;
use crate::support::repo_types::SupportMessage;
use crate::transactions::repo_types::{NewTransaction, Transaction};

/// Data access used by the handlers. Each method is one atomic unit of work.
#[async_trait]
pub trait Store: Send + Sync {
    /// Create the user or overwrite its display fields. The flag is `true` on creation.
    async fn upsert_user(&self, profile: &TelegramProfile) -> anyhow::Result<(User, bool)>;

    async fn list_messages(&self, user_id: i64) -> anyhow::Result<Vec<SupportMessage>>;

    /// Store the user's message followed by the system reply; both or neither.
    async fn append_message_pair(
        &self,
        user_id: i64,
        message: &str,
        reply: &str,
    ) -> anyhow::Result<(SupportMessage, SupportMessage)>;

    async fn create_transaction(&self, new: &NewTransaction) -> anyhow::Result<Transaction>;

    /// Newest first, at most `limit` rows.
    async fn list_transactions(&self, user_id: i64, limit: i64) -> anyhow::Result<Vec<Transaction>>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await
            .context("connect to database")?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
    async fn upsert_user(&self, profile: &TelegramProfile) -> anyhow::Result<(User, bool)> {
        User::upsert(&self.pool, profile).await
    }

    async fn list_messages(&self, user_id: i64) -> anyhow::Result<Vec<SupportMessage>> {
        SupportMessage::list_by_user(&self.pool, user_id).await
    }

    async fn append_message_pair(
        &self,
        user_id: i64,
        message: &str,
        reply: &str,
    ) -> anyhow::Result<(SupportMessage, SupportMessage)> {
        // Dropping `tx` on an early return rolls both inserts back.
        let mut tx = self.pool.begin().await.context("begin tx")?;
        let sent = SupportMessage::insert_tx(&mut tx, user_id, message, false).await?;
        let auto_reply = SupportMessage::insert_tx(&mut tx, user_id, reply, true).await?;
        tx.commit().await.context("commit tx")?;
        debug!(user_id, sent = sent.id, auto_reply = auto_reply.id, "message pair stored");
        Ok((sent, auto_reply))
    }

    async fn create_transaction(&self, new: &NewTransaction) -> anyhow::Result<Transaction> {
        Transaction::create(&self.pool, new).await
    }

    async fn list_transactions(&self, user_id: i64, limit: i64) -> anyhow::Result<Vec<Transaction>> {
        Transaction::list_by_user(&self.pool, user_id, limit).await
    }
}

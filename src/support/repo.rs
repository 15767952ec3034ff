use anyhow::Context;
use sqlx::{PgPool, Postgres, Transaction};

use crate::support::repo_types::SupportMessage;

impl SupportMessage {
    /// Whole conversation for a user, oldest first.
    pub async fn list_by_user(db: &PgPool, user_id: i64) -> anyhow::Result<Vec<SupportMessage>> {
        let rows = sqlx::query_as::<_, SupportMessage>(
            r#"
            SELECT id, message, is_admin, created_at
              FROM support_messages
             WHERE user_id = $1
             ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
        .context("list support messages")?;
        Ok(rows)
    }

    /// Insert one message within a transaction.
    pub async fn insert_tx(
        tx: &mut Transaction<'_, Postgres>,
        user_id: i64,
        message: &str,
        is_admin: bool,
    ) -> anyhow::Result<SupportMessage> {
        let row = sqlx::query_as::<_, SupportMessage>(
            r#"
            INSERT INTO support_messages (user_id, message, is_admin)
            VALUES ($1, $2, $3)
            RETURNING id, message, is_admin, created_at
            "#,
        )
        .bind(user_id)
        .bind(message)
        .bind(is_admin)
        .fetch_one(&mut **tx)
        .await
        .context("insert support message")?;
        Ok(row)
    }
}

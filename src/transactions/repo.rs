use anyhow::Context;
use sqlx::PgPool;

use crate::transactions::repo_types::{NewTransaction, Transaction, TransactionRow, STATUS_PENDING};

impl Transaction {
    pub async fn list_by_user(
        db: &PgPool,
        user_id: i64,
        limit: i64,
    ) -> anyhow::Result<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, TransactionRow>(
            r#"
            SELECT id, type AS kind, amount::float8 AS amount, steam_login,
                   status, region, description, created_at
              FROM transactions
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(db)
        .await
        .context("list transactions")?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    pub async fn create(db: &PgPool, new: &NewTransaction) -> anyhow::Result<Transaction> {
        let row = sqlx::query_as::<_, TransactionRow>(
            r#"
            INSERT INTO transactions (user_id, type, amount, steam_login, status, region, description)
            VALUES ($1, $2, $3::numeric, $4, $5, $6, $7)
            RETURNING id, type AS kind, amount::float8 AS amount, steam_login,
                      status, region, description, created_at
            "#,
        )
        .bind(new.user_id)
        .bind(new.kind.as_str())
        .bind(new.amount)
        .bind(new.steam_login.as_deref())
        .bind(STATUS_PENDING)
        .bind(new.region.as_deref())
        .bind(&new.description)
        .fetch_one(db)
        .await
        .context("insert transaction")?;

        Ok(Transaction::from(row))
    }
}

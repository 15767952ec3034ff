use anyhow::Context;
use sqlx::PgPool;

use crate::auth::repo_types::{TelegramProfile, UpsertedUser, User};

impl User {
    /// Insert the user or overwrite its display fields, in one statement.
    pub async fn upsert(db: &PgPool, profile: &TelegramProfile) -> anyhow::Result<(User, bool)> {
        let row = sqlx::query_as::<_, UpsertedUser>(
            r#"
            INSERT INTO users (telegram_id, username, first_name, last_name, photo_url)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (telegram_id) DO UPDATE
               SET username   = EXCLUDED.username,
                   first_name = EXCLUDED.first_name,
                   last_name  = EXCLUDED.last_name,
                   photo_url  = EXCLUDED.photo_url,
                   updated_at = CURRENT_TIMESTAMP
            RETURNING id, telegram_id, username, first_name, last_name, photo_url,
                      balance::float8 AS balance,
                      (xmax = 0) AS created
            "#,
        )
        .bind(profile.telegram_id)
        .bind(profile.username.as_deref())
        .bind(profile.first_name.as_deref())
        .bind(profile.last_name.as_deref())
        .bind(profile.photo_url.as_deref())
        .fetch_one(db)
        .await
        .context("upsert user")?;
        Ok((row.user, row.created))
    }
}

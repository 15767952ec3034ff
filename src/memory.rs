//! In-memory [`Store`] used by handler tests.

use std::sync::Mutex;

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use time::OffsetDateTime;

use crate::auth::repo_types::{TelegramProfile, User};
use crate::db::Store;
use crate::support::repo_types::SupportMessage;
use crate::transactions::repo_types::{NewTransaction, Transaction, STATUS_PENDING};

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    users: Vec<User>,
    messages: Vec<(i64, SupportMessage)>,
    transactions: Vec<(i64, Transaction)>,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn ensure_user(&self, user_id: i64) -> anyhow::Result<()> {
        if self.users.iter().any(|u| u.id == user_id) {
            Ok(())
        } else {
            bail!("foreign key violation: user {} does not exist", user_id)
        }
    }
}

impl MemoryStore {
    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| anyhow!("memory store poisoned"))
    }

    /// Insert a user directly, bypassing the login flow.
    pub fn seed_user(&self, telegram_id: i64, balance: f64) -> User {
        let mut inner = self.inner.lock().unwrap();
        let user = User {
            id: inner.next_id(),
            telegram_id,
            username: None,
            first_name: None,
            last_name: None,
            photo_url: None,
            balance,
        };
        inner.users.push(user.clone());
        user
    }

    pub fn users(&self) -> Vec<User> {
        self.inner.lock().unwrap().users.clone()
    }

    pub fn message_count(&self) -> usize {
        self.inner.lock().unwrap().messages.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.inner.lock().unwrap().transactions.len()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn upsert_user(&self, profile: &TelegramProfile) -> anyhow::Result<(User, bool)> {
        let mut inner = self.lock()?;
        if let Some(user) = inner
            .users
            .iter_mut()
            .find(|u| u.telegram_id == profile.telegram_id)
        {
            user.username = profile.username.clone();
            user.first_name = profile.first_name.clone();
            user.last_name = profile.last_name.clone();
            user.photo_url = profile.photo_url.clone();
            return Ok((user.clone(), false));
        }

        let user = User {
            id: inner.next_id(),
            telegram_id: profile.telegram_id,
            username: profile.username.clone(),
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            photo_url: profile.photo_url.clone(),
            balance: 0.0,
        };
        inner.users.push(user.clone());
        Ok((user, true))
    }

    async fn list_messages(&self, user_id: i64) -> anyhow::Result<Vec<SupportMessage>> {
        let inner = self.lock()?;
        let mut out: Vec<SupportMessage> = inner
            .messages
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, m)| m.clone())
            .collect();
        out.sort_by_key(|m| (m.created_at, m.id));
        Ok(out)
    }

    async fn append_message_pair(
        &self,
        user_id: i64,
        message: &str,
        reply: &str,
    ) -> anyhow::Result<(SupportMessage, SupportMessage)> {
        let mut inner = self.lock()?;
        inner.ensure_user(user_id)?;
        let now = OffsetDateTime::now_utc();
        let sent = SupportMessage {
            id: inner.next_id(),
            message: message.to_string(),
            is_admin: false,
            created_at: Some(now),
        };
        let auto_reply = SupportMessage {
            id: inner.next_id(),
            message: reply.to_string(),
            is_admin: true,
            created_at: Some(now),
        };
        inner.messages.push((user_id, sent.clone()));
        inner.messages.push((user_id, auto_reply.clone()));
        Ok((sent, auto_reply))
    }

    async fn create_transaction(&self, new: &NewTransaction) -> anyhow::Result<Transaction> {
        let mut inner = self.lock()?;
        inner.ensure_user(new.user_id)?;
        let tx = Transaction {
            id: inner.next_id(),
            kind: new.kind.as_str().to_string(),
            amount: new.amount,
            steam_login: new.steam_login.clone(),
            status: STATUS_PENDING.to_string(),
            region: new.region.clone(),
            description: Some(new.description.clone()),
            created_at: Some(OffsetDateTime::now_utc()),
        };
        inner.transactions.push((new.user_id, tx.clone()));
        Ok(tx)
    }

    async fn list_transactions(&self, user_id: i64, limit: i64) -> anyhow::Result<Vec<Transaction>> {
        let inner = self.lock()?;
        let mut out: Vec<Transaction> = inner
            .transactions
            .iter()
            .filter(|(owner, _)| *owner == user_id)
            .map(|(_, t)| t.clone())
            .collect();
        out.sort_by_key(|t| std::cmp::Reverse((t.created_at, t.id)));
        out.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(out)
    }
}

/// Store whose every call fails, for exercising the 500 path.
pub struct FailingStore;

#[async_trait]
impl Store for FailingStore {
    async fn upsert_user(&self, _p: &TelegramProfile) -> anyhow::Result<(User, bool)> {
        bail!("connection refused: db.internal:5432")
    }
    async fn list_messages(&self, _u: i64) -> anyhow::Result<Vec<SupportMessage>> {
        bail!("connection refused: db.internal:5432")
    }
    async fn append_message_pair(
        &self,
        _u: i64,
        _m: &str,
        _r: &str,
    ) -> anyhow::Result<(SupportMessage, SupportMessage)> {
        bail!("connection refused: db.internal:5432")
    }
    async fn create_transaction(&self, _n: &NewTransaction) -> anyhow::Result<Transaction> {
        bail!("connection refused: db.internal:5432")
    }
    async fn list_transactions(&self, _u: i64, _l: i64) -> anyhow::Result<Vec<Transaction>> {
        bail!("connection refused: db.internal:5432")
    }
}

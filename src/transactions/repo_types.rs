use std::str::FromStr;

use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Status every new transaction is stored with.
pub const STATUS_PENDING: &str = "pending";

/// Most recent transactions returned by a listing.
pub const LIST_LIMIT: i64 = 20;

/// Accepted values of a new transaction's `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Topup,
    RegionChange,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Topup => "topup",
            TransactionKind::RegionChange => "region_change",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "topup" => Ok(TransactionKind::Topup),
            "region_change" => Ok(TransactionKind::RegionChange),
            other => anyhow::bail!("unknown transaction type: {}", other),
        }
    }
}

/// Row as stored; `type` is plain TEXT.
#[derive(Debug, FromRow)]
pub struct TransactionRow {
    pub id: i64,
    pub kind: String,
    pub amount: Option<f64>,
    pub steam_login: Option<String>,
    pub status: String,
    pub region: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
    pub id: i64,
    /// Stored text, passed through unchanged so rows written before the type was
    /// validated still list.
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Option<f64>,
    pub steam_login: Option<String>,
    pub status: String,
    pub region: Option<String>,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<TransactionRow> for Transaction {
    fn from(r: TransactionRow) -> Self {
        Self {
            id: r.id,
            kind: r.kind,
            amount: r.amount,
            steam_login: r.steam_login,
            status: r.status,
            region: r.region,
            description: r.description,
            created_at: r.created_at,
        }
    }
}

/// Validated input for a new pending transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: i64,
    pub kind: TransactionKind,
    pub amount: Option<f64>,
    pub steam_login: Option<String>,
    pub region: Option<String>,
    pub description: String,
}

use serde::{Deserialize, Serialize};

use crate::transactions::repo_types::Transaction;

#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<f64>,
    pub steam_login: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Serialize)]
pub struct CreatedTransactionResponse {
    pub success: bool,
    pub transaction: Transaction,
}

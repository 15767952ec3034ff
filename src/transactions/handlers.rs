use axum::{extract::State, http::StatusCode, response::Response, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    cors::{preflight, ALLOW_CONTENT_TYPE_AND_USER},
    error::{method_not_allowed, ApiError},
    extractors::{JsonBody, QueryParams, UserIdQuery},
    state::AppState,
    transactions::{
        dto::{CreateTransactionRequest, CreatedTransactionResponse, TransactionsResponse},
        repo_types::LIST_LIMIT,
    },
};

pub fn transaction_routes() -> Router<AppState> {
    Router::new().route(
        "/transactions",
        get(list_transactions)
            .post(create_transaction)
            .options(transactions_preflight)
            .fallback(method_not_allowed),
    )
}

async fn transactions_preflight() -> Response {
    preflight("GET, POST, OPTIONS", ALLOW_CONTENT_TYPE_AND_USER)
}

#[instrument(skip(state))]
pub async fn list_transactions(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let user_id = query.require()?;
    let transactions = state.store.list_transactions(user_id, LIST_LIMIT).await?;
    Ok(Json(TransactionsResponse { transactions }))
}

#[instrument(skip(state, payload))]
pub async fn create_transaction(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<CreatedTransactionResponse>), ApiError> {
    let new = payload.validate().map_err(|e| {
        warn!(error = %e, "transaction rejected");
        e
    })?;

    let transaction = state.store.create_transaction(&new).await?;

    info!(
        user_id = new.user_id,
        transaction_id = transaction.id,
        kind = %transaction.kind,
        "transaction created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreatedTransactionResponse {
            success: true,
            transaction,
        }),
    ))
}

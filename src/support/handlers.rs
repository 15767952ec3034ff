use axum::{extract::State, http::StatusCode, response::Response, routing::get, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    cors::{preflight, ALLOW_CONTENT_TYPE_AND_USER},
    error::{method_not_allowed, ApiError},
    extractors::{JsonBody, QueryParams, UserIdQuery},
    state::AppState,
    support::{
        dto::{MessagesResponse, SendMessageRequest, SentMessageResponse},
        repo_types::AUTO_REPLY,
    },
};

pub fn support_routes() -> Router<AppState> {
    Router::new().route(
        "/support",
        get(list_messages)
            .post(send_message)
            .options(support_preflight)
            .fallback(method_not_allowed),
    )
}

async fn support_preflight() -> Response {
    preflight("GET, POST, OPTIONS", ALLOW_CONTENT_TYPE_AND_USER)
}

#[instrument(skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let user_id = query.require()?;
    let messages = state.store.list_messages(user_id).await?;
    Ok(Json(MessagesResponse { messages }))
}

#[instrument(skip(state, payload))]
pub async fn send_message(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SendMessageRequest>,
) -> Result<(StatusCode, Json<SentMessageResponse>), ApiError> {
    let message = payload.message.filter(|m| !m.trim().is_empty());
    let user_id = payload.user_id.filter(|id| *id != 0);
    let (Some(user_id), Some(message)) = (user_id, message) else {
        warn!("support message without user_id or text");
        return Err(ApiError::MissingField("user_id and message are required"));
    };

    let (message, auto_reply) = state
        .store
        .append_message_pair(user_id, &message, AUTO_REPLY)
        .await?;

    info!(user_id, message_id = message.id, "support message stored");
    Ok((
        StatusCode::CREATED,
        Json(SentMessageResponse {
            success: true,
            message,
            auto_reply,
        }),
    ))
}

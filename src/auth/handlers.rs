use axum::{extract::State, response::Response, routing::post, Json, Router};
use time::OffsetDateTime;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest},
        services::{is_auth_date_stale, verify_telegram_auth},
    },
    cors::{preflight, ALLOW_CONTENT_TYPE},
    error::{method_not_allowed, ApiError},
    extractors::JsonBody,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new().route(
        "/auth",
        post(login).options(auth_preflight).fallback(method_not_allowed),
    )
}

async fn auth_preflight() -> Response {
    preflight("POST, OPTIONS", ALLOW_CONTENT_TYPE)
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let data = payload.telegram_data;

    let Some(telegram_id) = data.id.filter(|id| *id != 0) else {
        warn!("login without telegram id");
        return Err(ApiError::MissingField("Telegram ID is required"));
    };

    let telegram = &state.config.telegram;
    let signature = data.hash.as_deref().filter(|h| !h.is_empty());
    if let (Some(bot_token), Some(_)) = (telegram.bot_token.as_deref(), signature) {
        if !verify_telegram_auth(&data, bot_token)? {
            warn!(telegram_id, "telegram signature mismatch");
            return Err(ApiError::InvalidSignature);
        }
        if let (Some(max_age), Some(auth_date)) = (telegram.auth_max_age_secs, data.auth_date) {
            let now = OffsetDateTime::now_utc().unix_timestamp();
            if is_auth_date_stale(auth_date, max_age, now) {
                warn!(telegram_id, auth_date, "telegram auth data expired");
                return Err(ApiError::InvalidSignature);
            }
        }
    }

    let (user, created) = state.store.upsert_user(&data.profile(telegram_id)).await?;

    info!(user_id = user.id, telegram_id, created, "telegram login");
    Ok(Json(AuthResponse {
        success: true,
        user,
    }))
}

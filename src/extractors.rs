use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use tracing::warn;

use crate::error::ApiError;

/// `Json<T>` that rejects with the JSON error envelope instead of axum's plain text.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                warn!(error = %rejection, "rejected request body");
                Err(ApiError::BadRequest(rejection.body_text()))
            }
        }
    }
}

/// `Query<T>` with the same rejection shape as [`JsonBody`].
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `?user_id=` shared by the list endpoints.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    pub fn require(&self) -> Result<i64, ApiError> {
        let raw = self
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::MissingField("user_id is required"))?;
        raw.parse::<i64>()
            .map_err(|_| ApiError::BadRequest("user_id must be an integer".into()))
    }
}

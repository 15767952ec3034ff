use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tower_http::set_header::SetResponseHeaderLayer;

/// Headers a browser may send on cross-origin calls to a resource.
pub const ALLOW_CONTENT_TYPE: &str = "Content-Type";
pub const ALLOW_CONTENT_TYPE_AND_USER: &str = "Content-Type, X-User-Id";

/// Fixed preflight answer; the request itself is never inspected.
pub fn preflight(methods: &'static str, headers: &'static str) -> Response {
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, methods),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, headers),
            (header::ACCESS_CONTROL_MAX_AGE, "86400"),
        ],
    )
        .into_response()
}

/// Stamps `Access-Control-Allow-Origin: *` on every response.
pub fn allow_any_origin() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    )
}

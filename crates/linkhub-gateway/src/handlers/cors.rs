use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    AUTHORIZATION, CONTENT_TYPE,
};
use axum::http::{HeaderName, Method, StatusCode};
use axum::response::IntoResponse;
use tower_http::cors::{Any, CorsLayer};

pub const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
pub const ALLOWED_METHODS: &str = "POST, OPTIONS";

/// Answers CORS preflights for browser callers on any origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            CONTENT_TYPE,
        ])
}

/// Handles `OPTIONS` requests that are not full CORS preflights. The
/// request body is never read.
pub async fn preflight_handler() -> impl IntoResponse {
    (
        StatusCode::NO_CONTENT,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
        ],
    )
}

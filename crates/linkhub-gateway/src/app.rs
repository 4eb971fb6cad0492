use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::handlers::{
    cors_layer, health_handler, preflight_handler, providers_handler, shorten_link_handler,
};
use crate::model::ErrorResponse;
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/providers", get(providers_handler))
            .route(
                "/",
                post(shorten_link_handler).options(preflight_handler),
            )
            .route(
                "/shorten-link",
                post(shorten_link_handler).options(preflight_handler),
            )
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer())
            .with_state(state)
    }
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown error".to_string()
    };
    error!(panic = %message, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

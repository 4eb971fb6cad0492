use crate::model::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use linkhub_core::GatewayError;
use thiserror::Error;
use tracing::{error, warn};

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Gateway(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Gateway(_) | AppError::InvalidBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

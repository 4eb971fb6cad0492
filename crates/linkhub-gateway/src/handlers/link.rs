use crate::error::Result;
use crate::model::{ShortenLinkRequest, ShortenLinkResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use linkhub_core::ShortenRequest;
use tracing::debug;

pub async fn shorten_link_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenLinkResponse>> {
    let payload: ShortenLinkRequest = serde_json::from_slice(&body)?;
    let service = payload.service();
    let request = ShortenRequest::parse(payload.url, service.as_deref())?;
    debug!(provider = %request.provider(), "accepted shorten request");

    let link = state.shortener().shorten(request).await?;

    Ok(Json(ShortenLinkResponse {
        shortened_url: link.short_url,
    }))
}

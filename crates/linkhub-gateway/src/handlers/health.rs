use crate::model::{HealthResponse, ProviderStatus, ProvidersResponse};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use linkhub_core::ProviderId;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Lists supported providers and whether this deployment can reach them.
pub async fn providers_handler(State(state): State<AppState>) -> Json<ProvidersResponse> {
    let providers = ProviderId::ALL
        .into_iter()
        .map(|id| ProviderStatus {
            id,
            name: id.display_name(),
            configured: state.shortener().is_configured(id),
        })
        .collect();

    Json(ProvidersResponse {
        default: ProviderId::default(),
        providers,
    })
}

use linkhub_core::ProviderId;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct ProvidersResponse {
    pub default: ProviderId,
    pub providers: Vec<ProviderStatus>,
}

#[derive(Serialize)]
pub struct ProviderStatus {
    pub id: ProviderId,
    pub name: &'static str,
    pub configured: bool,
}
